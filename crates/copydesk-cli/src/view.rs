//! Terminal listing views.

use colored::Colorize;

use copydesk::{Action, ListingView, Notice, PaginationState, Row};

use crate::output;

/// Either listing view the CLI can drive, selected by `--json`.
#[derive(Debug)]
pub enum CliView {
    Table(TableView),
    Json(JsonView),
}

impl CliView {
    pub fn new(json: bool) -> Self {
        if json {
            Self::Json(JsonView)
        } else {
            Self::Table(TableView::new())
        }
    }
}

impl ListingView for CliView {
    fn set_controls_enabled(&mut self, enabled: bool) {
        match self {
            Self::Table(v) => v.set_controls_enabled(enabled),
            Self::Json(v) => v.set_controls_enabled(enabled),
        }
    }

    fn show_loading(&mut self) {
        match self {
            Self::Table(v) => v.show_loading(),
            Self::Json(v) => v.show_loading(),
        }
    }

    fn show_rows(&mut self, rows: &[Row]) {
        match self {
            Self::Table(v) => v.show_rows(rows),
            Self::Json(v) => v.show_rows(rows),
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        match self {
            Self::Table(v) => v.show_notice(notice),
            Self::Json(v) => v.show_notice(notice),
        }
    }

    fn show_pagination(&mut self, state: Option<&PaginationState>) {
        match self {
            Self::Table(v) => v.show_pagination(state),
            Self::Json(v) => v.show_pagination(state),
        }
    }
}

/// A [`ListingView`] that prints rows and pagination to the terminal.
#[derive(Debug, Default)]
pub struct TableView;

impl TableView {
    pub fn new() -> Self {
        Self
    }

    fn print_row(&self, row: &Row) {
        println!("{}", row.title.bold());
        if !row.detail.is_empty() {
            println!("  {}", row.detail);
        }
        if let Some(words) = row.word_count {
            output::field("  Words", &words.to_string());
        }
        if let Some(ref price) = row.price {
            output::field("  Price", &format!("$ {}", price));
        }
        if let Some(ref preview) = row.preview {
            output::field("  Preview", preview.as_str());
        }
        match &row.action {
            Action::Purchase { key, .. } => {
                output::field("  Purchase", &format!("copydesk purchase {}", key));
            }
            Action::Import { key } => {
                output::field("  Import", &format!("copydesk import {}", key));
            }
            Action::Configure => {
                println!(
                    "  {}",
                    "Disabled - run 'copydesk settings' to add a license key and accept the terms"
                        .dimmed()
                );
            }
        }
        println!();
    }
}

impl ListingView for TableView {
    fn set_controls_enabled(&mut self, _enabled: bool) {
        // One-shot terminal output has no live controls to disable; the
        // in-flight window is covered by awaiting the fetch.
    }

    fn show_loading(&mut self) {
        eprintln!("{}", "Loading...".dimmed());
    }

    fn show_rows(&mut self, rows: &[Row]) {
        for row in rows {
            self.print_row(row);
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        match notice {
            Notice::NoResults => eprintln!("{}", "No results found.".dimmed()),
            Notice::NoPurchases => eprintln!("{}", "No purchases yet.".dimmed()),
            Notice::FailedToConnect => {
                output::error("Could not connect to the catalog. Please try again.")
            }
            Notice::LibraryLoaded => output::success("Library loaded."),
        }
    }

    fn show_pagination(&mut self, state: Option<&PaginationState>) {
        if let Some(p) = state {
            println!(
                "{}",
                format!(
                    "Page {} of {} ({} items)",
                    p.current_page(),
                    p.total_pages(),
                    p.total()
                )
                .dimmed()
            );
        }
    }
}

/// A [`ListingView`] that prints rows and pagination as JSON on stdout.
///
/// Notices go to stderr as plain text so stdout stays machine-readable.
#[derive(Debug, Default)]
pub struct JsonView;

impl ListingView for JsonView {
    fn set_controls_enabled(&mut self, _enabled: bool) {}

    fn show_loading(&mut self) {}

    fn show_rows(&mut self, rows: &[Row]) {
        if output::json_pretty(&rows).is_err() {
            output::error("Failed to encode rows as JSON.");
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        match notice {
            Notice::NoResults => eprintln!("No results found."),
            Notice::NoPurchases => eprintln!("No purchases yet."),
            Notice::FailedToConnect => {
                output::error("Could not connect to the catalog. Please try again.")
            }
            Notice::LibraryLoaded => eprintln!("Library loaded."),
        }
    }

    fn show_pagination(&mut self, state: Option<&PaginationState>) {
        if let Some(p) = state {
            if output::json_pretty(p).is_err() {
                output::error("Failed to encode pagination as JSON.");
            }
        }
    }
}
