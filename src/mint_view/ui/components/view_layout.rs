use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::mint_view::constants::FOOTER_HEIGHT;
use crate::mint_view::domain::models::Severity;

/// Title bar, content, optional footer line
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    footer: Option<String>,
}

impl ViewLayout {
    pub fn new(title: String) -> Self {
        Self {
            title,
            subtitle: None,
            footer: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_footer(mut self, footer: Option<String>) -> Self {
        self.footer = footer;
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let title_height = if self.subtitle.is_some() { 3 } else { 2 };
        let mut constraints = vec![
            Constraint::Length(title_height), // Title bar
            Constraint::Min(0),               // Content
        ];
        if self.footer.is_some() {
            constraints.push(Constraint::Length(FOOTER_HEIGHT));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_title_bar(f, chunks[0]);
        render_content(f, chunks[1]);

        if let Some(footer) = &self.footer {
            if chunks.len() > 2 {
                let footer = Paragraph::new(Line::from(vec![
                    Span::styled("[v] ", Styles::action_key()),
                    Span::styled(footer.as_str(), Styles::link()),
                ]))
                .alignment(Alignment::Right);
                f.render_widget(footer, chunks[2]);
            }
        }
    }

    fn render_title_bar(&self, f: &mut Frame, area: Rect) {
        let mut title_lines = vec![Line::from(vec![Span::styled(
            &self.title,
            Styles::title(),
        )])];

        if let Some(ref subtitle) = self.subtitle {
            title_lines.push(Line::from(Span::styled(subtitle, Styles::subtitle())));
        }

        let title_block = Paragraph::new(title_lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Center);

        f.render_widget(title_block, area);
    }
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Magenta;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const INFO: Color = Color::Blue;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn action_key() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn action_description() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn busy() -> Style {
        Style::default()
            .fg(ColorScheme::ACCENT)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ColorScheme::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Info => ColorScheme::INFO,
            Severity::Success => ColorScheme::SUCCESS,
            Severity::Warning => ColorScheme::WARNING,
            Severity::Error => ColorScheme::ERROR,
        }
    }
}
