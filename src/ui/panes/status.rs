//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Where the app is in the run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No run outstanding
    Idle,
    Playing,
    Paused,
    /// The last run was committed
    Done,
}

pub struct StatusView<'a> {
    pub message: &'a str,
    /// Index of the displayed step (0 = the input before any step)
    pub step: usize,
    /// Number of recorded steps in the current run
    pub total_steps: usize,
    pub state: PlaybackState,
    pub is_error: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, view: &StatusView) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step info and status
    let step_text = match view.state {
        PlaybackState::Idle | PlaybackState::Done => " Ready ".to_string(),
        PlaybackState::Playing | PlaybackState::Paused => {
            format!(" Step {}/{} ", view.step, view.total_steps)
        }
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if view.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", view.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if view.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    let mut bind = |key: &'static str, desc: &'static str| {
        if !right_spans.is_empty() {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    };

    match view.state {
        PlaybackState::Playing | PlaybackState::Paused => {
            bind(" ⎵ ", " play/pause ");
            bind(" ←/→ ", " step ");
            bind(" esc ", " abort ");
        }
        PlaybackState::Idle | PlaybackState::Done => {
            bind(" ↵ ", " sort ");
            bind(" ↑/↓ ", " algorithm ");
            bind(" r ", " new array ");
            bind(" +/- ", " size ");
        }
    }
    bind(" [/] ", " speed ");
    bind("q", " quit ");

    let badge = match view.state {
        PlaybackState::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackState::Paused => Some((" ❚❚ PAUSED ", DEFAULT_THEME.primary)),
        PlaybackState::Done => Some((" SORTED ", DEFAULT_THEME.success)),
        PlaybackState::Idle => None,
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
