//! Terminal output utilities for styled CLI output.

use std::fmt::Display;

use admin_users_business::{PageDescriptor, PageState, User};
use console::{Term, style};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("⚠").yellow().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print an empty line.
    pub fn newline(&self) {
        drop(self.term.write_line(""));
    }

    /// Print a labeled value.
    pub fn labeled(&self, label: impl Display, value: impl Display) {
        drop(
            self.term
                .write_line(&format!("{}: {}", style(label).dim(), value)),
        );
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print the users table, the pager line and the page summary.
    pub fn page(&self, state: &PageState) {
        if state.users.is_empty() {
            self.dim("No users on this page.");
        } else {
            self.newline();
            self.print(users_table(&state.users));
        }

        if !state.pages.is_empty() {
            self.print(format!("{} {}", style("Pages:").dim(), pager_line(&state.pages)));
        }
        self.print(format!(
            "{}: page {} of {} ({} per page)",
            style("Showing").bold(),
            style(state.page).cyan(),
            style(state.total_pages).cyan(),
            state.per_page
        ));
    }
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Login")]
    login: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Admin")]
    admin: &'static str,
    #[tabled(rename = "Last seen")]
    last_seen: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            admin: if user.is_admin { "yes" } else { "" },
            last_seen: user
                .last_seen_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Rounded table with one row per user.
pub fn users_table(users: &[User]) -> String {
    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Page numbers separated by spaces, the current one in brackets: `1 [2] 3`.
pub fn pager_line(pages: &[PageDescriptor]) -> String {
    pages
        .iter()
        .map(|d| {
            if d.current {
                format!("[{}]", d.page)
            } else {
                d.page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
