//! Every spinner animation on one line, each ticking at its own rate.

use crossterm::event::Event;
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Duration;

use crate::{
    keys::{self, QUIT_KEYS},
    runtime::{Command, Program},
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerKind {
    Dot,
    Ellipsis,
    Globe,
    Hamburger,
    Jump,
    Line,
    Moon,
    Pulse,
    Meter,
    MiniDot,
    Monkey,
    Points,
}

impl SpinnerKind {
    pub const fn all() -> &'static [SpinnerKind] {
        &[
            SpinnerKind::Dot,
            SpinnerKind::Ellipsis,
            SpinnerKind::Globe,
            SpinnerKind::Hamburger,
            SpinnerKind::Jump,
            SpinnerKind::Line,
            SpinnerKind::Moon,
            SpinnerKind::Pulse,
            SpinnerKind::Meter,
            SpinnerKind::MiniDot,
            SpinnerKind::Monkey,
            SpinnerKind::Points,
        ]
    }

    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerKind::Dot => &["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "],
            SpinnerKind::Ellipsis => &["", ".", "..", "..."],
            SpinnerKind::Globe => &["🌍", "🌎", "🌏"],
            SpinnerKind::Hamburger => &["☱", "☲", "☴", "☲"],
            SpinnerKind::Jump => &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"],
            SpinnerKind::Line => &["|", "/", "-", "\\"],
            SpinnerKind::Moon => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
            SpinnerKind::Pulse => &["█", "▓", "▒", "░"],
            SpinnerKind::Meter => &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▰▰▱", "▰▱▱", "▱▱▱"],
            SpinnerKind::MiniDot => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            SpinnerKind::Monkey => &["🙈", "🙉", "🙊"],
            SpinnerKind::Points => &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"],
        }
    }

    /// Time between frames.
    pub fn interval(&self) -> Duration {
        let fps = match self {
            SpinnerKind::Dot | SpinnerKind::Jump | SpinnerKind::Line => 10,
            SpinnerKind::MiniDot => 12,
            SpinnerKind::Moon | SpinnerKind::Pulse => 8,
            SpinnerKind::Meter | SpinnerKind::Points => 7,
            SpinnerKind::Globe => 4,
            SpinnerKind::Ellipsis | SpinnerKind::Hamburger | SpinnerKind::Monkey => 3,
        };
        Duration::from_secs(1) / fps
    }
}

#[derive(Debug, Clone)]
pub struct Spinner {
    kind: SpinnerKind,
    frame: usize,
}

impl Spinner {
    pub fn new(kind: SpinnerKind) -> Self {
        Self { kind, frame: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.kind.frames()[self.frame]
    }

    fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.kind.frames().len();
    }
}

#[derive(Debug)]
pub enum SpinnerMessage {
    /// Frame tick for the spinner at this index.
    Tick(usize),
    Quit,
    Ignored,
}

#[derive(Debug)]
pub struct SpinnersApp {
    spinners: Vec<Spinner>,
    quitting: bool,
    theme: Theme,
}

impl SpinnersApp {
    pub fn new(theme: Theme) -> Self {
        Self {
            spinners: SpinnerKind::all().iter().copied().map(Spinner::new).collect(),
            quitting: false,
            theme,
        }
    }

    fn schedule(&self, index: usize) -> Command<SpinnerMessage> {
        let interval = self.spinners[index].kind.interval();
        Command::tick(interval, SpinnerMessage::Tick(index))
    }

    fn line(&self) -> Line<'static> {
        // frames freeze in the muted color on the way out
        let style = if self.quitting { self.theme.text_muted() } else { self.theme.text_brand() };
        let spans: Vec<Span<'static>> = self
            .spinners
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                let sep = (i > 0).then(|| Span::raw(" "));
                sep.into_iter().chain([Span::styled(s.current(), style)])
            })
            .collect();
        Line::from(spans)
    }
}

impl Program for SpinnersApp {
    type Message = SpinnerMessage;

    fn init(&mut self) -> Command<SpinnerMessage> {
        Command::batch((0..self.spinners.len()).map(|i| self.schedule(i)))
    }

    fn update(&mut self, message: SpinnerMessage) -> Command<SpinnerMessage> {
        match message {
            SpinnerMessage::Tick(index) if index < self.spinners.len() => {
                self.spinners[index].advance();
                self.schedule(index)
            }
            SpinnerMessage::Tick(index) => {
                tracing::warn!(index, "tick for unknown spinner");
                Command::None
            }
            SpinnerMessage::Quit => {
                self.quitting = true;
                Command::Quit
            }
            SpinnerMessage::Ignored => Command::None,
        }
    }

    fn view(&self, frame: &mut Frame) {
        frame.render_widget(Paragraph::new(self.line()), frame.area());
    }

    fn translate(&self, event: Event) -> Option<SpinnerMessage> {
        let key = keys::pressed(&event)?;
        if keys::is_one_of(key, QUIT_KEYS) {
            Some(SpinnerMessage::Quit)
        } else {
            Some(SpinnerMessage::Ignored)
        }
    }
}
