//! Wallet-linked mint view.
//!
//! `AppState::update` decides, this controller executes: wallet calls run on
//! worker threads and come back over a channel tagged with the view epoch.
//! A reload bumps the epoch, so anything still in flight from before the
//! reload is dropped on arrival.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::MintConfig;
use crate::wallet::{Subscription, WalletProvider};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::clipboard_service::{Clipboard, SystemClipboard};
use self::application::mint_service::{MessageSink, MintService};
use self::constants::*;
use self::domain::models::{Mode, Notice, Severity};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// A message from a worker or watcher, stamped with the epoch it was sent in
struct Envelope {
    epoch: u64,
    message: Message,
}

pub struct MintView {
    state: AppState,
    renderer: Renderer,
    service: Arc<MintService>,
    clipboard: Box<dyn Clipboard>,
    sender: Sender<Envelope>,
    receiver: Receiver<Envelope>,
    epoch: u64,
    subscriptions: Vec<Subscription>,
    toast_timers: Vec<(u64, Instant)>,
    last_ctrl_c_press: Option<Instant>,
}

impl MintView {
    pub fn new(config: MintConfig, provider: Option<Arc<dyn WalletProvider>>) -> Self {
        let service = Arc::new(MintService::new(provider, config.contract_address));
        let (sender, receiver) = mpsc::channel();

        Self {
            state: AppState::new(config),
            renderer: Renderer::new(),
            service,
            clipboard: Box::new(SystemClipboard),
            sender,
            receiver,
            epoch: 0,
            subscriptions: Vec::new(),
            toast_timers: Vec::new(),
            last_ctrl_c_press: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.mount();
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        self.subscriptions.clear();
        result
    }

    /// Startup work: look for an authorized account and read the counters
    pub(crate) fn mount(&mut self) {
        tracing::info!(
            "Mounting mint view (epoch {}, provider: {})",
            self.epoch,
            self.service.has_provider()
        );
        self.execute_command(Command::CheckExistingConnection.and(Command::RefreshSupply));
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            while let Ok(envelope) = self.receiver.try_recv() {
                self.deliver(envelope);
            }

            self.check_timers();

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    let should_quit = self.handle_input(key);
                    if should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the view should exit
    pub(crate) fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            return false;
        }

        let message = match self.state.mode {
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Main => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('?') => Some(Message::ShowHelp),
                KeyCode::Char('r') => Some(Message::ReloadRequested),
                KeyCode::Char('x') => Some(Message::DismissNewestToast),
                _ => self.renderer.get_mint_card_mut(&self.state).handle_key(key),
            },
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn deliver(&mut self, envelope: Envelope) {
        if envelope.epoch != self.epoch {
            tracing::debug!(
                "Dropping stale result from epoch {}: {:?}",
                envelope.epoch,
                envelope.message
            );
            return;
        }
        self.handle_message(envelope.message);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::CheckExistingConnection => {
                let service = self.service.clone();
                self.spawn_task(move |report| {
                    if let Some(message) = service.check_existing_connection() {
                        report(message);
                    }
                });
            }
            Command::RequestAccounts => {
                let service = self.service.clone();
                self.spawn_task(move |report| report(service.connect()));
            }
            Command::RefreshSupply => {
                let service = self.service.clone();
                self.spawn_task(move |report| {
                    if let Some(message) = service.refresh_supply_counters() {
                        report(message);
                    }
                });
            }
            Command::SubmitMint(account) => {
                let service = self.service.clone();
                self.spawn_task(move |report| service.request_mint(account, report));
            }
            Command::ArmSubscriptions(account) => {
                tracing::info!("Arming wallet subscriptions for {}", account);
                let sink = self.sink();
                match self.service.subscribe_to_mint_events(sink.clone()) {
                    Ok(subscription) => self.subscriptions.push(subscription),
                    Err(e) => self.handle_message(Message::SubscriptionFailed(e)),
                }
                match self.service.subscribe_to_network_changes(sink) {
                    Ok(subscription) => self.subscriptions.push(subscription),
                    Err(e) => self.handle_message(Message::SubscriptionFailed(e)),
                }
            }
            Command::Reload => self.reload(),
            Command::CopyToClipboard(text) => {
                let notice = match self.clipboard.copy(&text) {
                    Ok(()) => Notice::new("Copied to clipboard", text).severity(Severity::Success),
                    Err(e) => {
                        tracing::warn!("Clipboard copy failed: {:#}", e);
                        Notice::new("Failed to copy", format!("{e}")).severity(Severity::Error)
                    }
                };
                self.handle_message(Message::Notify(notice));
            }
            Command::ScheduleDismissToast { id, delay_ms } => {
                self.toast_timers
                    .push((id, Instant::now() + Duration::from_millis(delay_ms)));
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
        }
    }

    /// Drop every subscription and start over with fresh state
    fn reload(&mut self) {
        tracing::info!("Reloading view");
        self.epoch += 1;
        for subscription in self.subscriptions.drain(..) {
            subscription.cancel();
        }
        self.toast_timers.clear();
        self.last_ctrl_c_press = None;
        self.state.reset();
        self.mount();
    }

    fn check_timers(&mut self) {
        let now = Instant::now();
        let (expired, pending): (Vec<_>, Vec<_>) = self
            .toast_timers
            .drain(..)
            .partition(|(_, deadline)| *deadline <= now);
        self.toast_timers = pending;
        for (id, _) in expired {
            self.handle_message(Message::DismissToast(id));
        }

        if let Some(last_press) = self.last_ctrl_c_press {
            if last_press.elapsed() >= Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                self.last_ctrl_c_press = None;
                if ui::components::is_exit_prompt(&self.state.ui.message) {
                    self.state.ui.message = None;
                }
            }
        }
    }

    /// Channel sink for watcher callbacks in the current epoch
    fn sink(&self) -> MessageSink {
        let sender = self.sender.clone();
        let epoch = self.epoch;
        Arc::new(move |message: Message| {
            let _ = sender.send(Envelope { epoch, message });
        })
    }

    fn spawn_task<F>(&self, task: F)
    where
        F: FnOnce(&dyn Fn(Message)) + Send + 'static,
    {
        let sender = self.sender.clone();
        let epoch = self.epoch;
        thread::spawn(move || {
            let report = |message: Message| {
                let _ = sender.send(Envelope { epoch, message });
            };
            task(&report);
        });
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Wait up to `timeout` for one worker message and apply it.
    /// Returns false on timeout.
    #[cfg(test)]
    pub(crate) fn pump(&mut self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(envelope) => {
                self.deliver(envelope);
                true
            }
            Err(_) => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn expire_timers(&mut self) {
        for timer in &mut self.toast_timers {
            timer.1 = Instant::now();
        }
        self.check_timers();
    }
}
