use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::mint_view::constants::{CARD_HEIGHT, CARD_MAX_WIDTH};
use crate::mint_view::domain::models::{LinkKind, MintStatus, SupplyCounters};
use crate::mint_view::ui::components::view_layout::Styles;
use crate::mint_view::ui::components::{Component, centered_rect};
use crate::mint_view::ui::events::Message;

pub const TAGLINE: &str = "Each unique. Each beautiful. Discover your NFT today.";

/// Which single action row the card shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Connect,
    Mint { in_progress: bool },
    Links { marketplace: bool },
}

/// The centered mint card: supply line plus one action row
pub struct MintCard {
    connected: bool,
    status: MintStatus,
    awaiting_wallet: bool,
    supply: Option<SupplyCounters>,
    has_explorer_link: bool,
    has_marketplace_link: bool,
    confirmed_at: Option<DateTime<Local>>,
}

impl Default for MintCard {
    fn default() -> Self {
        Self::new()
    }
}

impl MintCard {
    pub fn new() -> Self {
        Self {
            connected: false,
            status: MintStatus::Idle,
            awaiting_wallet: false,
            supply: None,
            has_explorer_link: false,
            has_marketplace_link: false,
            confirmed_at: None,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn set_status(&mut self, status: MintStatus, awaiting_wallet: bool) {
        self.status = status;
        self.awaiting_wallet = awaiting_wallet;
    }

    pub fn set_supply(&mut self, supply: Option<SupplyCounters>) {
        self.supply = supply;
    }

    pub fn set_links(&mut self, explorer: bool, marketplace: bool) {
        self.has_explorer_link = explorer;
        self.has_marketplace_link = explorer && marketplace;
    }

    pub fn set_confirmed_at(&mut self, confirmed_at: Option<DateTime<Local>>) {
        self.confirmed_at = confirmed_at;
    }

    pub fn action(&self) -> CardAction {
        if !self.connected {
            CardAction::Connect
        } else if self.has_explorer_link {
            CardAction::Links {
                marketplace: self.has_marketplace_link,
            }
        } else {
            CardAction::Mint {
                in_progress: self.status == MintStatus::Pending || self.awaiting_wallet,
            }
        }
    }

    fn action_line(&self) -> Line<'static> {
        match self.action() {
            CardAction::Connect => Line::from(vec![
                Span::styled("[c] ", Styles::action_key()),
                Span::styled("Connect to Wallet", Styles::action_description()),
            ]),
            CardAction::Mint { in_progress: false } => Line::from(vec![
                Span::styled("[m] ", Styles::action_key()),
                Span::styled("Mint NFT", Styles::action_description()),
            ]),
            CardAction::Mint { in_progress: true } => {
                let label = if self.status == MintStatus::Pending {
                    "Mining... please wait"
                } else {
                    "Confirm in your wallet..."
                };
                Line::from(Span::styled(label, Styles::busy()))
            }
            CardAction::Links { marketplace } => {
                let mut spans = vec![
                    Span::styled("[e] ", Styles::action_key()),
                    Span::styled("See on explorer", Styles::link()),
                ];
                if marketplace {
                    spans.push(Span::raw("   "));
                    spans.push(Span::styled("[o] ", Styles::action_key()));
                    spans.push(Span::styled("See on marketplace", Styles::link()));
                }
                Line::from(spans)
            }
        }
    }
}

impl Component for MintCard {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let card_area = centered_rect(area, CARD_MAX_WIDTH, CARD_HEIGHT);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(TAGLINE, Styles::dimmed())),
            Line::from(""),
        ];
        match &self.supply {
            Some(supply) => lines.push(Line::from(Span::styled(supply.label(), Styles::normal()))),
            None => lines.push(Line::from("")),
        }
        lines.push(Line::from(""));
        lines.push(self.action_line());

        if self.status == MintStatus::Confirmed {
            lines.push(Line::from(""));
            if let Some(confirmed_at) = self.confirmed_at {
                lines.push(Line::from(Span::styled(
                    format!("Minted at {}", confirmed_at.format("%Y-%m-%d %H:%M:%S")),
                    Styles::success(),
                )));
            }
            if !self.has_marketplace_link {
                lines.push(Line::from(Span::styled(
                    "Waiting for the token id...",
                    Styles::dimmed(),
                )));
            }
        }

        f.render_widget(Clear, card_area);
        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Mint ")
                    .borders(Borders::ALL)
                    .border_style(Styles::title()),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(card, card_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match (key.code, self.action()) {
            (KeyCode::Char('c'), CardAction::Connect) => Some(Message::ConnectRequested),
            (KeyCode::Char('m'), CardAction::Mint { in_progress: false }) => {
                Some(Message::MintRequested)
            }
            (KeyCode::Char('e'), CardAction::Links { .. }) => {
                Some(Message::CopyLink(LinkKind::Explorer))
            }
            (KeyCode::Char('o'), CardAction::Links { marketplace: true }) => {
                Some(Message::CopyLink(LinkKind::Marketplace))
            }
            (KeyCode::Char('v'), _) => Some(Message::CopyLink(LinkKind::Collection)),
            _ => None,
        }
    }
}
