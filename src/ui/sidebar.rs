use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, FilterField};
use crate::model::filter::{ComponentFilter, Industry, StatusGroup};
use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Industry::ALL.len() as u16 + 2),
            Constraint::Min(ComponentFilter::options().len() as u16 + 2),
            Constraint::Length(StatusGroup::ALL.len() as u16 + 2),
        ])
        .split(area);

    let industry_labels: Vec<&str> = Industry::ALL.iter().map(|i| i.label()).collect();
    render_picker(
        f,
        sections[0],
        app,
        FilterField::Industry,
        &industry_labels,
        app.industry_idx,
    );

    let component_labels: Vec<&'static str> = ComponentFilter::options()
        .iter()
        .map(|c| c.label())
        .collect();
    render_picker(
        f,
        sections[1],
        app,
        FilterField::Component,
        &component_labels,
        app.component_idx,
    );

    let status_labels: Vec<&str> = StatusGroup::ALL.iter().map(|s| s.label()).collect();
    render_picker(
        f,
        sections[2],
        app,
        FilterField::Status,
        &status_labels,
        app.status_idx,
    );
}

fn render_picker(
    f: &mut Frame,
    area: Rect,
    app: &App,
    field: FilterField,
    labels: &[&str],
    selected: usize,
) {
    let focused = app.focused == field;

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == selected {
                Style::default()
                    .fg(theme::BORDER)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == selected { "> " } else { "  " };
            ListItem::new(Line::styled(format!("{marker}{label}"), style))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(theme::BORDER)
    } else {
        Style::default().fg(theme::HINT)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(theme::filter_title(field)),
    );

    f.render_widget(list, area);
}
