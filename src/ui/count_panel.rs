use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let selection = app.selection();
    let caption = format!(
        "Total use cases in {} for {} with {} status",
        selection.component, selection.industry, selection.status
    );

    let value_line = if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(theme::ERROR),
        ))
    } else if app.loading_count {
        Line::from(Span::styled(
            "Fetching count from Jira...",
            Style::default().fg(theme::HINT),
        ))
    } else if let Some(count) = app.count {
        Line::from(Span::styled(
            count.to_string(),
            Style::default()
                .fg(theme::METRIC)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled("—", Style::default().fg(theme::HINT)))
    };

    let lines = vec![
        Line::from(Span::styled(caption, Style::default().fg(theme::HINT))),
        value_line,
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .title(" Count "),
    );

    f.render_widget(paragraph, area);
}
