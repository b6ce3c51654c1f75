use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::mint_view::constants::{MAX_VISIBLE_TOASTS, TOAST_HEIGHT, TOAST_WIDTH};
use crate::mint_view::domain::models::Toast;
use crate::mint_view::ui::components::Component;
use crate::mint_view::ui::components::view_layout::Styles;
use crate::mint_view::ui::events::Message;

/// Newest-first toast column anchored to the top-right corner
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStack {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn set_toasts(&mut self, toasts: Vec<Toast>) {
        self.toasts = toasts;
    }

    /// The toasts that fit on screen, newest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(MAX_VISIBLE_TOASTS)
    }

    pub fn hidden_count(&self) -> usize {
        self.toasts.len().saturating_sub(MAX_VISIBLE_TOASTS)
    }
}

impl Component for ToastStack {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width - width;
        let mut y = area.y;

        for toast in self.visible() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
            let color = Styles::severity_color(toast.severity);
            let title = if toast.auto_close {
                format!(" {} ", toast.title)
            } else {
                format!(" {} [x] ", toast.title)
            };

            f.render_widget(Clear, toast_area);
            let body = Paragraph::new(Line::from(Span::raw(toast.description.clone())))
                .block(
                    Block::default()
                        .title(Span::styled(title, Style::default().fg(color)))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(body, toast_area);
            y += TOAST_HEIGHT;
        }

        let hidden = self.hidden_count();
        if hidden > 0 && y < area.y + area.height {
            let more = Paragraph::new(Span::styled(format!("+{hidden} more"), Styles::dimmed()))
                .alignment(ratatui::layout::Alignment::Right);
            f.render_widget(more, Rect::new(x, y, width, 1));
        }
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
