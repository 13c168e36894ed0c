//! Algorithm menu and run settings

use crate::algorithms::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

pub struct MenuView {
    pub selected: Algorithm,
    pub array_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub step_delay: Duration,
    /// Menu is locked while a run is being played back
    pub locked: bool,
}

/// Render the algorithm list (top) and the explanation/settings panel (bottom)
pub fn render_menu_pane(frame: &mut Frame, area: Rect, view: &MenuView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Algorithm::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    render_algorithm_list(frame, rows[0], view);
    render_details(frame, rows[1], view);
}

fn render_algorithm_list(frame: &mut Frame, area: Rect, view: &MenuView) {
    let border_style = if view.locked {
        Style::default().fg(DEFAULT_THEME.border_normal)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            if algorithm == view.selected {
                ListItem::new(Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.secondary)),
                    Span::styled(
                        algorithm.name(),
                        Style::default()
                            .fg(DEFAULT_THEME.border_focused)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
                .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                ListItem::new(format!("  {}", algorithm.name()))
                    .style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_details(frame: &mut Frame, area: Rect, view: &MenuView) {
    let block = Block::default()
        .title(" How it works ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.primary);

    let mut lines = vec![
        Line::from(Span::styled(
            view.selected.description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Array size  ", label),
            Span::styled(
                format!("{} ({}-{})", view.array_size, view.min_size, view.max_size),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Step delay  ", label),
            Span::styled(format!("{} ms", view.step_delay.as_millis()), value),
        ]),
    ];

    if view.selected.requires_non_negative() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Accepts non-negative values only.",
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Red bars are the elements touched by the current step.",
        label,
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
