//! Bar chart of the array being sorted

use crate::constants::VALUE_MAX;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// What the chart should show this frame
pub struct BarsView<'a> {
    pub title: &'a str,
    pub values: &'a [i64],
    pub highlighted: &'a [usize],
    /// Draw every bar in the "finished" color
    pub done: bool,
}

/// Bar width and gap that fit `count` bars into `inner_width` columns
pub fn bar_layout(count: usize, inner_width: u16) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let width = inner_width as usize;
    if count * 2 - 1 <= width {
        let bar_width = ((width + 1) / count).saturating_sub(1).max(1);
        (bar_width as u16, 1)
    } else {
        ((width / count).max(1) as u16, 0)
    }
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &BarsView) {
    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if view.values.is_empty() {
        let paragraph = Paragraph::new("(no array, press r to generate one)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let (bar_width, bar_gap) = bar_layout(view.values.len(), area.width.saturating_sub(2));
    let show_values = bar_width >= 2;

    let bars: Vec<Bar> = view
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = if view.highlighted.contains(&index) {
                DEFAULT_THEME.bar_highlight
            } else if view.done {
                DEFAULT_THEME.bar_done
            } else {
                DEFAULT_THEME.bar
            };
            let label = if show_values {
                value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    // Keep the scale fixed across frames so bars do not jump while sorting
    let max = view
        .values
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(VALUE_MAX - 1)
        .max(1) as u64;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max);

    frame.render_widget(chart, area);
}
