use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::mint_view::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::mint_view::ui::components::{Component, centered_rect};
use crate::mint_view::ui::events::Message;

pub struct HelpDialog;

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        vec![
            Line::from(vec![Span::styled(
                "mintdeck - Mint an NFT from your wallet",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled("Wallet:", heading)]),
            Line::from("  c           - Connect to wallet"),
            Line::from("  m           - Mint an NFT"),
            Line::from("  r           - Reload the view"),
            Line::from(""),
            Line::from(vec![Span::styled("Links (copied to clipboard):", heading)]),
            Line::from("  e           - Transaction on the explorer"),
            Line::from("  o           - Token on the marketplace"),
            Line::from("  v           - Collection page"),
            Line::from(""),
            Line::from(vec![Span::styled("General:", heading)]),
            Line::from("  x           - Dismiss newest notification"),
            Line::from("  ?           - Show this help"),
            Line::from("  q / Esc     - Quit"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));
        let dialog_area = centered_rect(area, width, height);

        // Clear the area behind the dialog
        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
