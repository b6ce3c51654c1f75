#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::mint_card::{CardAction, MintCard, TAGLINE};
    use crate::mint_view::domain::models::{LinkKind, MintStatus, SupplyCounters};
    use crate::mint_view::ui::events::Message;
    use alloy_primitives::U256;
    use chrono::{Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(card: &mut MintCard) -> Buffer {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    fn connected_card() -> MintCard {
        let mut card = MintCard::new();
        card.set_connected(true);
        card
    }

    #[test]
    fn test_disconnected_shows_connect_only() {
        let mut card = MintCard::new();
        assert_eq!(card.action(), CardAction::Connect);

        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "Connect to Wallet"));
        assert!(!buffer_contains_text(&buffer, "Mint NFT"));
        assert!(buffer_contains_text(&buffer, TAGLINE));
    }

    #[test]
    fn test_connected_shows_mint_action() {
        let mut card = connected_card();
        assert_eq!(card.action(), CardAction::Mint { in_progress: false });

        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "Mint NFT"));
        assert!(!buffer_contains_text(&buffer, "Connect to Wallet"));
    }

    #[test]
    fn test_pending_mint_is_labelled_in_progress() {
        let mut card = connected_card();
        card.set_status(MintStatus::Pending, false);
        assert_eq!(card.action(), CardAction::Mint { in_progress: true });

        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "Mining... please wait"));
        assert!(!buffer_contains_text(&buffer, "Mint NFT"));
    }

    #[test]
    fn test_awaiting_signature_is_in_progress() {
        let mut card = connected_card();
        card.set_status(MintStatus::Idle, true);

        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "Confirm in your wallet"));
        assert!(card.handle_key(key('m')).is_none());
    }

    #[test]
    fn test_explorer_link_replaces_mint_action() {
        let mut card = connected_card();
        card.set_status(MintStatus::Confirmed, false);
        card.set_links(true, false);
        card.set_confirmed_at(Some(Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()));

        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "See on explorer"));
        assert!(!buffer_contains_text(&buffer, "See on marketplace"));
        assert!(!buffer_contains_text(&buffer, "Mint NFT"));
        assert!(buffer_contains_text(&buffer, "Minted at 2024-01-02 03:04:05"));
    }

    #[test]
    fn test_marketplace_link_shown_when_set() {
        let mut card = connected_card();
        card.set_status(MintStatus::Confirmed, false);
        card.set_links(true, true);

        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "See on explorer"));
        assert!(buffer_contains_text(&buffer, "See on marketplace"));
    }

    #[test]
    fn test_marketplace_link_never_shown_without_explorer_link() {
        let mut card = connected_card();
        card.set_links(false, true);

        assert_eq!(card.action(), CardAction::Mint { in_progress: false });
        let buffer = render(&mut card);
        assert!(!buffer_contains_text(&buffer, "See on marketplace"));
    }

    #[test]
    fn test_supply_line() {
        let mut card = MintCard::new();
        let buffer = render(&mut card);
        assert!(!buffer_contains_text(&buffer, "minted"));

        card.set_supply(Some(SupplyCounters::from_values(
            U256::from(3u64),
            U256::from(50u64),
        )));
        let buffer = render(&mut card);
        assert!(buffer_contains_text(&buffer, "3 / 50 minted"));
    }

    #[test]
    fn test_keys_follow_visible_action() {
        let mut card = MintCard::new();
        assert!(matches!(card.handle_key(key('c')), Some(Message::ConnectRequested)));
        assert!(card.handle_key(key('m')).is_none());

        let mut card = connected_card();
        assert!(card.handle_key(key('c')).is_none());
        assert!(matches!(card.handle_key(key('m')), Some(Message::MintRequested)));
        assert!(card.handle_key(key('e')).is_none());

        card.set_links(true, false);
        assert!(matches!(
            card.handle_key(key('e')),
            Some(Message::CopyLink(LinkKind::Explorer))
        ));
        assert!(card.handle_key(key('o')).is_none());

        card.set_links(true, true);
        assert!(matches!(
            card.handle_key(key('o')),
            Some(Message::CopyLink(LinkKind::Marketplace))
        ));
    }

    #[test]
    fn test_collection_key_always_available() {
        let mut card = MintCard::new();
        assert!(matches!(
            card.handle_key(key('v')),
            Some(Message::CopyLink(LinkKind::Collection))
        ));
    }

    #[test]
    fn test_ctrl_keys_are_ignored() {
        let mut card = MintCard::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(card.handle_key(ctrl_c).is_none());
    }
}
