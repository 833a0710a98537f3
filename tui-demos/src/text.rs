//! Single-field form that asks for a name and greets the user.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    keys,
    runtime::{Command, Program},
    theme::Theme,
};

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "Enter your name";
const CHAR_LIMIT: usize = 20;
const QUIT_KEYS: &[&str] = &["ctrl+c", "esc"];

/// Editable single-line buffer with a character limit. `cursor` counts chars,
/// not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    limit: usize,
}

impl TextInput {
    pub fn new(limit: usize) -> Self {
        Self { limit, ..Default::default() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.byte_index(self.cursor)]
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        if self.len() >= self.limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing key; returns `false` if the key is not an edit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return false,
        }
        true
    }
}

#[derive(Debug)]
pub enum TextMessage {
    Key(KeyEvent),
    Submit,
    Quit,
}

#[derive(Debug)]
pub struct TextApp {
    input: TextInput,
    name: Option<String>,
    theme: Theme,
}

impl TextApp {
    pub fn new(theme: Theme) -> Self {
        Self {
            input: TextInput::new(CHAR_LIMIT),
            name: None,
            theme,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn input_line(&self) -> Line<'static> {
        let focused = self.theme.text_highlight();
        let mut spans = vec![Span::styled(PROMPT, focused)];
        if self.input.value().is_empty() {
            spans.push(Span::styled(PLACEHOLDER, self.theme.text_muted()));
        } else {
            spans.push(Span::styled(self.input.value().to_string(), focused));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("[ Submit ]", self.theme.text_highlight().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled("enter", self.theme.text_muted()),
        ])
    }
}

impl Program for TextApp {
    type Message = TextMessage;

    fn init(&mut self) -> Command<TextMessage> {
        Command::None
    }

    fn update(&mut self, message: TextMessage) -> Command<TextMessage> {
        match message {
            TextMessage::Quit => return Command::Quit,
            TextMessage::Submit => {
                tracing::debug!(name = self.input.value(), "submitted");
                self.name = Some(self.input.value().to_string()).filter(|n| !n.is_empty());
            }
            TextMessage::Key(key) => {
                self.input.handle_key(&key);
            }
        }
        Command::None
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if let Some(name) = self.name() {
            frame.render_widget(Paragraph::new(format!("Hello, {name}!")), area);
            return;
        }

        let [title, _, input, button] = Layout::vertical([Constraint::Length(1); 4]).areas(area);

        frame.render_widget(Paragraph::new("Write your name, please"), title);
        frame.render_widget(Paragraph::new(self.input_line()), input);
        frame.render_widget(Paragraph::new(self.button_line()), button);

        // display columns, not chars: wide glyphs take two cells
        let offset = Span::raw(PROMPT).width() + Span::raw(self.input.before_cursor()).width();
        let x = input.x.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), input.y));
    }

    fn translate(&self, event: Event) -> Option<TextMessage> {
        let key = keys::pressed(&event)?;
        let message = if keys::is_one_of(key, QUIT_KEYS) {
            TextMessage::Quit
        } else if key.code == KeyCode::Enter {
            TextMessage::Submit
        } else {
            TextMessage::Key(*key)
        };
        Some(message)
    }
}
