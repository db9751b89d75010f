//! Status bar rendering with keybindings and the selected node path

use super::theme::Theme;
use crate::inspect::PaletteMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub selected_path: Option<&'a str>,
    pub row: usize,
    pub total_rows: usize,
    pub palette_mode: PaletteMode,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let theme = Theme::for_mode(data.palette_mode);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: position, selected path and message
    let position = if data.total_rows == 0 {
        " 0/0 ".to_string()
    } else {
        format!(" {}/{} ", data.row + 1, data.total_rows)
    };

    let bar_style = Style::default().bg(theme.status_bg);
    let left_spans = vec![
        Span::styled(
            position,
            Style::default()
                .bg(theme.comment)
                .fg(theme.bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.selected_path.unwrap_or("-")),
            bar_style.fg(theme.fg),
        ),
        Span::styled("│", bar_style.fg(theme.icon)),
        Span::styled(format!(" {} ", data.message), bar_style.fg(theme.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(theme.status_key_bg).fg(theme.bg);
    let desc_style = bar_style.fg(theme.fg);
    let sep_style = bar_style.fg(theme.icon);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ↑/↓ ", " move "),
        (" ←/→ ", " fold "),
        (" ↵ ", " toggle "),
        (" e/c ", " all "),
        (" r ", " reset "),
        (" t ", " theme "),
        (" q ", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
