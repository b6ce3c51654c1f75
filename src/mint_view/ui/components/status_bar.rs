use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::mint_view::domain::models::shorten_address;
use crate::mint_view::ui::components::view_layout::Styles;
use crate::mint_view::ui::components::{Component, is_exit_prompt};
use crate::mint_view::ui::events::Message;
use crate::wallet::ChainId;

const KEY_HINTS: &str = "c connect · m mint · ? help · q quit";

pub struct StatusBar {
    account: Option<String>,
    chain_id: Option<ChainId>,
    wrong_network: bool,
    message: Option<String>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            account: None,
            chain_id: None,
            wrong_network: false,
            message: None,
        }
    }

    pub fn set_account(&mut self, account: Option<String>) {
        self.account = account;
    }

    pub fn set_chain(&mut self, chain_id: Option<ChainId>, wrong_network: bool) {
        self.chain_id = chain_id;
        self.wrong_network = wrong_network;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    fn wallet_spans(&self) -> Vec<Span<'static>> {
        let mut spans = match &self.account {
            Some(account) => vec![
                Span::styled("● ", Styles::success()),
                Span::styled(shorten_address(account), Styles::normal()),
            ],
            None => vec![
                Span::styled("○ ", Styles::dimmed()),
                Span::styled("Not connected", Styles::dimmed()),
            ],
        };
        if let Some(chain_id) = self.chain_id {
            let style = if self.wrong_network {
                Styles::warning()
            } else {
                Styles::dimmed()
            };
            spans.push(Span::styled(format!("  chain {chain_id}"), style));
            if self.wrong_network {
                spans.push(Span::styled(" (wrong network)", Styles::warning()));
            }
        }
        spans
    }
}

impl Component for StatusBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        f.render_widget(Paragraph::new(Line::from(self.wallet_spans())), chunks[0]);

        let right = match &self.message {
            Some(message) if is_exit_prompt(&self.message) => {
                Span::styled(message.clone(), Styles::warning())
            }
            Some(message) => Span::styled(message.clone(), Styles::normal()),
            None => Span::styled(KEY_HINTS, Styles::dimmed()),
        };
        f.render_widget(
            Paragraph::new(Line::from(right)).alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
