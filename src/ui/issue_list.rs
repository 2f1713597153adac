use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(" Use Cases ");

    if !app.show_issue_list() {
        let notice = Paragraph::new(
            "Issue details are hidden when 'All' components are selected. \
             Showing only the total count.",
        )
        .style(Style::default().fg(theme::NOTICE))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(notice, area);
        return;
    }

    if app.loading_issues {
        let notice = Paragraph::new("Fetching issue list from Jira...")
            .style(Style::default().fg(theme::HINT))
            .block(block);
        f.render_widget(notice, area);
        return;
    }

    // The count panel carries the error banner; an empty list after a failed
    // fetch is not a zero-match result.
    if app.error.is_some() {
        f.render_widget(block, area);
        return;
    }

    if app.issues.is_empty() {
        let notice = Paragraph::new("No issues found for the selected filters.")
            .style(Style::default().fg(theme::NOTICE))
            .block(block);
        f.render_widget(notice, area);
        return;
    }

    let max_summary = area.width.saturating_sub(16) as usize;
    let items: Vec<ListItem> = app
        .issues
        .iter()
        .map(|issue| {
            let key_span = Span::styled(
                format!("{} ", issue.key),
                Style::default().fg(theme::KEY),
            );
            let summary: String = issue.summary.chars().take(max_summary).collect();
            let line = Line::from(vec![key_span, Span::raw(summary)]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
