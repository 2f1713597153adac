pub mod count_panel;
pub mod footer;
pub mod issue_list;
pub mod query_panel;
pub mod sidebar;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();

    // Sidebar (filters) + main content, with a one-line footer.
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(size);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(40)])
        .split(vertical[0]);

    sidebar::render(f, horizontal[0], app);

    // Main column: generated JQL, count metric, then the issue list (or the
    // wildcard notice filling the remaining space).
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(horizontal[1]);

    query_panel::render(f, main[0], app);
    count_panel::render(f, main[1], app);
    issue_list::render(f, main[2], app);

    footer::render(f, vertical[1], app);
}
