#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::status_bar::StatusBar;
    use crate::wallet::ChainId;
    use crate::wallet::mock::test_account;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn render(bar: &mut StatusBar) -> Buffer {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
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

    #[test]
    fn test_disconnected() {
        let mut bar = StatusBar::new();
        let buffer = render(&mut bar);
        assert!(buffer_contains_text(&buffer, "Not connected"));
        assert!(buffer_contains_text(&buffer, "? help"));
    }

    #[test]
    fn test_connected_account_is_shortened() {
        let mut bar = StatusBar::new();
        bar.set_account(Some(test_account().to_string()));
        let buffer = render(&mut bar);
        assert!(buffer_contains_text(&buffer, "0x5B38…ddC4"));
        assert!(!buffer_contains_text(&buffer, "Not connected"));
    }

    #[test]
    fn test_wrong_network_is_highlighted() {
        let mut bar = StatusBar::new();
        bar.set_chain(Some(ChainId(1)), true);
        let buffer = render(&mut bar);
        assert!(buffer_contains_text(&buffer, "chain 1"));
        assert!(buffer_contains_text(&buffer, "(wrong network)"));

        let chain_cell = buffer
            .content()
            .iter()
            .position(|cell| cell.symbol() == "1")
            .unwrap();
        assert_eq!(buffer.content()[chain_cell].fg, Color::Yellow);
    }

    #[test]
    fn test_required_network_is_plain() {
        let mut bar = StatusBar::new();
        bar.set_chain(Some(ChainId(4)), false);
        let buffer = render(&mut bar);
        assert!(buffer_contains_text(&buffer, "chain 4"));
        assert!(!buffer_contains_text(&buffer, "wrong network"));
    }

    #[test]
    fn test_message_replaces_key_hints() {
        let mut bar = StatusBar::new();
        bar.set_message(Some("Press Ctrl+C again to exit".to_string()));
        let buffer = render(&mut bar);
        assert!(buffer_contains_text(&buffer, "Press Ctrl+C again to exit"));
        assert!(!buffer_contains_text(&buffer, "? help"));
    }
}
