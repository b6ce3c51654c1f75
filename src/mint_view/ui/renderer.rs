use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::mint_view::constants::STATUS_BAR_HEIGHT;
use crate::mint_view::ui::app_state::{AppState, Mode};
use crate::mint_view::ui::components::{
    Component, help_dialog::HelpDialog, mint_card::MintCard, status_bar::StatusBar,
    toast_stack::ToastStack, view_layout::ViewLayout,
};

pub struct Renderer {
    mint_card: MintCard,
    status_bar: StatusBar,
    toast_stack: ToastStack,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            mint_card: MintCard::new(),
            status_bar: StatusBar::new(),
            toast_stack: ToastStack::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Main => self.render_main_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_main_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // Card
                Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
            ])
            .split(f.area());

        self.sync(state);

        let layout = ViewLayout::new(state.config.collection_name.clone())
            .with_subtitle(format!("Contract {}", state.config.contract_address))
            .with_footer(
                state
                    .config
                    .collection_url
                    .as_ref()
                    .map(|_| "View collection".to_string()),
            );
        let mint_card = &mut self.mint_card;
        layout.render(f, chunks[0], |f, area| mint_card.render(f, area));

        self.status_bar.render(f, chunks[1]);
        self.toast_stack.render(f, f.area());
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        // First render the main view underneath
        self.render_main_mode(f, state);

        // Then render the help dialog on top
        self.help_dialog.render(f, f.area());
    }

    /// Push the current state into the components
    fn sync(&mut self, state: &AppState) {
        self.mint_card.set_connected(state.wallet.account.is_some());
        self.mint_card
            .set_status(state.mint.status, state.mint.awaiting_wallet);
        self.mint_card.set_supply(state.supply.clone());
        self.mint_card.set_links(
            state.mint.explorer_link.is_some(),
            state.mint.marketplace_link.is_some(),
        );
        self.mint_card.set_confirmed_at(state.mint.confirmed_at);

        self.status_bar
            .set_account(state.wallet.account.map(|account| account.to_string()));
        self.status_bar
            .set_chain(state.wallet.chain_id, state.is_wrong_network());
        self.status_bar.set_message(state.ui.message.clone());

        self.toast_stack.set_toasts(state.ui.toasts.clone());
    }

    pub fn get_mint_card_mut(&mut self, state: &AppState) -> &mut MintCard {
        self.sync(state);
        &mut self.mint_card
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
