//! Subcommand implementations.

pub mod import;
pub mod library;
pub mod purchase;
pub mod search;
pub mod settings;

use copydesk::DEFAULT_PAGE_SIZE;

/// Offset of a 1-based page, saturating so an absurd `--page` degrades
/// to an empty last fetch instead of overflowing.
pub(crate) fn page_offset(page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_offset(1), 0);
        // Page 0 is treated as page 1
        assert_eq!(page_offset(0), 0);
    }

    #[test]
    fn later_pages_step_by_page_size() {
        assert_eq!(page_offset(3), 2 * DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn huge_page_saturates_instead_of_overflowing() {
        assert_eq!(page_offset(300_000_000), u32::MAX);
        assert_eq!(page_offset(u32::MAX), u32::MAX);
    }
}
