//! Reusable UI widgets
//!
//! Contains common UI components used across screens:
//! - Loading spinner
//! - Snackbar stack
//! - Status bar

use crate::snackbar::{SnackVariant, Snackbar};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render a centered loading indicator; `frame_idx` picks the spinner frame
pub fn render_loading(
    frame: &mut Frame,
    message: &str,
    frame_idx: usize,
    theme: &Theme,
    area: Rect,
) {
    let content = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                SPINNER_FRAMES[frame_idx % SPINNER_FRAMES.len()],
                Style::default().fg(theme.accent),
            ),
            Span::raw(" "),
            Span::styled(message, theme.text()),
        ]),
        Line::raw(""),
    ];

    let popup_width = 40u16.min(area.width.saturating_sub(4));
    let popup_area = centered_rect(popup_width, 5, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: 3u16.min(popup_area.height.saturating_sub(2)),
    };

    let loading = Paragraph::new(content)
        .alignment(Alignment::Center);
    frame.render_widget(loading, inner);
}

/// Render snackbars stacked upward from the bottom-left of `area`, newest lowest
pub fn render_snackbars<'a>(
    frame: &mut Frame,
    snackbars: impl DoubleEndedIterator<Item = &'a Snackbar>,
    theme: &Theme,
    area: Rect,
) {
    let mut bottom = area.y + area.height;

    for snack in snackbars.rev() {
        if bottom < area.y + 3 {
            break;
        }

        let (prefix, style) = match snack.variant {
            SnackVariant::Default => ("", theme.text()),
            SnackVariant::Success => ("✓ ", theme.success()),
            SnackVariant::Error => ("✗ ", theme.error()),
            SnackVariant::Warning => ("⚠ ", theme.warning()),
            SnackVariant::Info => ("ℹ ", theme.info()),
        };

        let line = Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(snack.message.as_str(), theme.text()),
        ]);

        // Width in terminal cells, not chars
        let width = u16::try_from(line.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let snack_area = Rect {
            x: area.x,
            y: bottom - 3,
            width,
            height: 3,
        };

        frame.render_widget(Clear, snack_area);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .style(theme.text()),
        );
        frame.render_widget(widget, snack_area);

        bottom -= 3;
    }
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1u16.min(area.height),
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);

    // Left side
    let left_widget = Paragraph::new(left_content)
        .style(theme.text_dim());

    // Right side
    let right_len = (right_content.chars().count() as u16).min(status_area.width.saturating_sub(1));
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: right_len + 1,
        height: status_area.height,
    };
    let right_widget = Paragraph::new(right_content)
        .style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Pad `text` with spaces to `width` terminal cells
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = Span::raw(text).width();
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}
