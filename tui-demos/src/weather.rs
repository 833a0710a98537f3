//! Weather card: fetches the current conditions for one location and shows
//! them as a centered card.

use crossterm::event::{Event, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};
use std::sync::Arc;
use weather_core::{WeatherError, WeatherRecord, WeatherSource};

use crate::{
    keys::{self, QUIT_KEYS},
    runtime::{Command, Program},
    theme::Theme,
};

const CARD_WIDTH: u16 = 50;
// borders + vertical padding + 6 text rows + the 3-row info boxes
const CARD_HEIGHT: u16 = 2 + 2 + 6 + 3;
const FOOTER_HINT: &str = "Press 'q' or 'esc' to quit, 'r' to refresh";
const REFRESH_KEYS: &[&str] = &["r"];

#[derive(Debug)]
pub enum WeatherMessage {
    Resize { width: u16, height: u16 },
    Quit,
    Refresh,
    Fetched(WeatherRecord),
    Failed(WeatherError),
    /// Any key without a binding.
    Key(KeyEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Loaded,
    Errored,
    Done,
}

/// What the caller should do after a message was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch,
    Quit,
}

/// State behind the card. `record` and `error` are never both set, and once
/// `done` is set it stays set.
#[derive(Debug, Default)]
pub struct ViewState {
    record: Option<WeatherRecord>,
    error: Option<WeatherError>,
    width: u16,
    height: u16,
    done: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        self.record.as_ref()
    }

    pub fn error(&self) -> Option<&WeatherError> {
        self.error.as_ref()
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn status(&self) -> Status {
        if self.done {
            Status::Done
        } else if self.error.is_some() {
            Status::Errored
        } else if self.record.is_some() {
            Status::Loaded
        } else {
            Status::Loading
        }
    }

    pub fn update(&mut self, message: WeatherMessage) -> Effect {
        match message {
            WeatherMessage::Resize { width, height } => {
                self.width = width;
                self.height = height;
                Effect::None
            }
            WeatherMessage::Quit => {
                self.done = true;
                Effect::Quit
            }
            WeatherMessage::Refresh => Effect::Fetch,
            WeatherMessage::Fetched(record) => {
                self.record = Some(record);
                self.error = None;
                Effect::None
            }
            WeatherMessage::Failed(error) => {
                self.error = Some(error);
                self.record = None;
                Effect::None
            }
            WeatherMessage::Key(key) => {
                tracing::trace!(key = %keys::key_name(&key), "unbound key");
                Effect::None
            }
        }
    }
}

/// [`Program`] wrapper that owns the data source and issues fetches.
#[derive(Debug)]
pub struct WeatherApp {
    state: ViewState,
    source: Arc<dyn WeatherSource>,
    location: String,
    theme: Theme,
    in_flight: bool,
}

impl WeatherApp {
    pub fn new(source: Arc<dyn WeatherSource>, location: impl Into<String>, theme: Theme) -> Self {
        Self {
            state: ViewState::new(),
            source,
            location: location.into(),
            theme,
            in_flight: false,
        }
    }

    fn fetch(&mut self) -> Command<WeatherMessage> {
        if self.in_flight {
            tracing::debug!("fetch already in flight, ignoring refresh");
            return Command::None;
        }
        self.in_flight = true;

        let source = Arc::clone(&self.source);
        let location = self.location.clone();
        Command::perform(async move {
            match source.fetch_weather(&location).await {
                Ok(record) => WeatherMessage::Fetched(record),
                Err(err) => WeatherMessage::Failed(err),
            }
        })
    }
}

impl Program for WeatherApp {
    type Message = WeatherMessage;

    fn init(&mut self) -> Command<WeatherMessage> {
        tracing::info!(location = %self.location, "starting weather card");
        self.fetch()
    }

    fn update(&mut self, message: WeatherMessage) -> Command<WeatherMessage> {
        tracing::debug!(?message, "update");

        if matches!(message, WeatherMessage::Fetched(_) | WeatherMessage::Failed(_)) {
            self.in_flight = false;
        }

        let effect = self.state.update(message);
        tracing::debug!(
            status = ?self.state.status(),
            done = self.state.is_done(),
            ?effect,
            "state after update"
        );

        match effect {
            Effect::None => Command::None,
            Effect::Fetch => self.fetch(),
            Effect::Quit => Command::Quit,
        }
    }

    fn view(&self, frame: &mut Frame) {
        render(&self.state, &self.theme, frame);
    }

    fn translate(&self, event: Event) -> Option<WeatherMessage> {
        if let Event::Resize(width, height) = event {
            return Some(WeatherMessage::Resize { width, height });
        }

        let key = keys::pressed(&event)?;
        let message = if keys::is_one_of(key, QUIT_KEYS) {
            WeatherMessage::Quit
        } else if keys::is_one_of(key, REFRESH_KEYS) {
            WeatherMessage::Refresh
        } else {
            WeatherMessage::Key(*key)
        };
        Some(message)
    }
}

/// Draw `state` into the frame; reads nothing but its arguments.
pub fn render(state: &ViewState, theme: &Theme, frame: &mut Frame) {
    let area = viewport(state, frame.area());

    if let Some(error) = state.error() {
        render_error(error, theme, frame, area);
    } else if let Some(record) = state.record() {
        render_card(record, state, theme, frame, area);
    } else {
        let loading = Paragraph::new("🌤️  Loading weather data...")
            .style(theme.text_info())
            .alignment(Alignment::Center)
            .block(Block::new().padding(Padding::uniform(2)));
        frame.render_widget(loading, area);
    }
}

/// Known viewport clipped to the frame, or the whole frame before the first resize.
fn viewport(state: &ViewState, area: Rect) -> Rect {
    let (width, height) = state.viewport();
    if width == 0 {
        return area;
    }
    Rect {
        width: width.min(area.width),
        height: height.min(area.height),
        ..area
    }
}

fn render_error(error: &WeatherError, theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.text_error().fg(theme.error_border))
        .padding(Padding::uniform(2));

    let panel = Paragraph::new(format!("❌ Error: {error}"))
        .style(theme.panel_error())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(panel, area);
}

fn render_card(record: &WeatherRecord, state: &ViewState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let [card_area, footer_area] = card_layout(state, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.text_body().fg(theme.card_border))
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let [header, _, temperature, _, condition, _, info] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(inner);

    let centered = |line: Line<'static>| Paragraph::new(line).alignment(Alignment::Center);

    frame.render_widget(
        centered(Line::styled(format!("📍 {}", record.location), theme.header())),
        header,
    );
    frame.render_widget(
        centered(Line::styled(
            format!("{} {}", record.icon().symbol(), record.temperature),
            theme.text_accent().add_modifier(Modifier::BOLD),
        )),
        temperature,
    );
    frame.render_widget(
        centered(Line::styled(
            record.condition.clone(),
            theme.text_body().add_modifier(Modifier::ITALIC),
        )),
        condition,
    );

    render_info_row(record, theme, frame, info);

    let footer = Paragraph::new(FOOTER_HINT)
        .style(theme.text_muted().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

/// Humidity and wind as two bordered boxes side by side.
fn render_info_row(record: &WeatherRecord, theme: &Theme, frame: &mut Frame, area: Rect) {
    let boxes = [
        ("💧 Humidity: ", record.humidity.as_str()),
        ("💨 Wind: ", record.wind_speed.as_str()),
    ];

    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(1)
        .areas(area);

    for ((label, value), slot) in boxes.into_iter().zip([left, right]) {
        let line = Line::from(vec![
            Span::styled(label, theme.text_info().add_modifier(Modifier::BOLD)),
            Span::styled(value.to_string(), theme.text_body()),
        ]);
        let info = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.text_body().fg(theme.info_border))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(info, slot);
    }
}

/// Card and footer rectangles: centered in the viewport once its size is
/// known, otherwise anchored at the top-left corner.
fn card_layout(state: &ViewState, area: Rect) -> [Rect; 2] {
    let width = if state.width > 0 {
        CARD_WIDTH.min(state.width.saturating_sub(4))
    } else {
        CARD_WIDTH
    }
    .min(area.width);
    // one spacer row, then the footer
    let height = (CARD_HEIGHT + 2).min(area.height);

    let (x, y) = if state.width > 0 {
        (
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
        )
    } else {
        (area.x, area.y)
    };

    let block = Rect { x, y, width, height };
    let [card, _, footer] = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(block);

    [card, footer]
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use weather_core::ErrorKind;

    #[derive(Debug)]
    struct FixedSource(WeatherRecord);

    #[async_trait]
    impl WeatherSource for FixedSource {
        async fn fetch_weather(&self, _location: &str) -> Result<WeatherRecord, WeatherError> {
            Ok(self.0.clone())
        }
    }

    fn ankara() -> WeatherRecord {
        WeatherRecord {
            location: "Ankara, Turkey".into(),
            temperature: "18°C".into(),
            condition: "Partly cloudy".into(),
            humidity: "60%".into(),
            wind_speed: "12 km/h".into(),
        }
    }

    fn state_in(status: Status) -> ViewState {
        let mut state = ViewState::new();
        match status {
            Status::Loaded => {
                state.update(WeatherMessage::Fetched(ankara()));
            }
            Status::Errored => {
                state.update(WeatherMessage::Failed(WeatherError::UpstreamStatus(503)));
            }
            Status::Done => {
                state.update(WeatherMessage::Quit);
            }
            Status::Loading => {}
        }
        state
    }

    fn draw(state: &ViewState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::dark();
        terminal.draw(|frame| render(state, &theme, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First rounded top-left corner in reading order: the card's own corner.
    fn card_corner(buffer: &Buffer) -> Option<(u16, u16)> {
        let area = buffer.area;
        (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .find(|&pos| buffer[pos].symbol() == "╭")
    }

    #[test]
    fn starts_loading() {
        let state = ViewState::new();
        assert_eq!(state.status(), Status::Loading);
        assert!(state.record().is_none() && state.error().is_none());
    }

    #[test]
    fn fetch_and_failure_replace_each_other() {
        let mut state = ViewState::new();

        state.update(WeatherMessage::Fetched(ankara()));
        assert_eq!(state.status(), Status::Loaded);

        state.update(WeatherMessage::Failed(WeatherError::UpstreamStatus(500)));
        assert_eq!(state.status(), Status::Errored);
        assert!(state.record().is_none());
        assert_eq!(state.error().map(WeatherError::kind), Some(ErrorKind::UpstreamStatus));

        state.update(WeatherMessage::Fetched(ankara()));
        assert_eq!(state.status(), Status::Loaded);
        assert!(state.error().is_none());
    }

    #[test]
    fn quit_is_terminal_from_every_state() {
        for status in [Status::Loading, Status::Loaded, Status::Errored, Status::Done] {
            let mut state = state_in(status);

            assert_eq!(state.update(WeatherMessage::Quit), Effect::Quit);
            assert!(state.is_done());
            assert_eq!(state.update(WeatherMessage::Quit), Effect::Quit);
            assert!(state.is_done());
            assert_eq!(state.status(), Status::Done);

            state.update(WeatherMessage::Fetched(ankara()));
            assert!(state.is_done());
        }
    }

    #[test]
    fn resize_keeps_status() {
        let mut state = state_in(Status::Loaded);
        let effect = state.update(WeatherMessage::Resize { width: 120, height: 40 });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.viewport(), (120, 40));
        assert_eq!(state.status(), Status::Loaded);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut state = state_in(Status::Errored);
        let effect = state.update(WeatherMessage::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.status(), Status::Errored);
    }

    #[test]
    fn translate_maps_quit_refresh_and_other_keys() {
        let app = WeatherApp::new(Arc::new(FixedSource(ankara())), "Ankara", Theme::dark());
        let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(matches!(app.translate(press(KeyCode::Char('q'))), Some(WeatherMessage::Quit)));
        assert!(matches!(app.translate(press(KeyCode::Esc)), Some(WeatherMessage::Quit)));
        assert!(matches!(
            app.translate(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))),
            Some(WeatherMessage::Quit)
        ));
        assert!(matches!(app.translate(press(KeyCode::Char('r'))), Some(WeatherMessage::Refresh)));
        assert!(matches!(app.translate(press(KeyCode::Char('x'))), Some(WeatherMessage::Key(_))));
        assert!(matches!(
            app.translate(Event::Resize(90, 30)),
            Some(WeatherMessage::Resize { width: 90, height: 30 })
        ));
    }

    #[test]
    fn refresh_is_ignored_while_fetch_in_flight() {
        let mut app = WeatherApp::new(Arc::new(FixedSource(ankara())), "Ankara", Theme::dark());

        assert!(matches!(app.init(), Command::Perform(_)));
        assert!(matches!(app.update(WeatherMessage::Refresh), Command::None));

        app.update(WeatherMessage::Fetched(ankara()));
        assert!(matches!(app.update(WeatherMessage::Refresh), Command::Perform(_)));
        assert!(matches!(app.update(WeatherMessage::Quit), Command::Quit));
    }

    #[tokio::test]
    async fn runs_fetch_through_the_runtime() {
        let mut app = WeatherApp::new(Arc::new(FixedSource(ankara())), "", Theme::dark());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        // quit arrives only after the fetch result has been applied
        let Command::Perform(task) = app.init() else { panic!("init should fetch") };
        let message = task.await;
        app.update(message);
        assert_eq!(app.state.status(), Status::Loaded);

        let quit = futures::stream::iter(vec![Ok(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )))]);
        crate::runtime::run_with(&mut terminal, &mut app, quit).await.unwrap();

        assert!(app.state.is_done());
        assert!(text(terminal.backend().buffer()).contains("Ankara, Turkey"));
    }

    #[test]
    fn loading_view_shows_indicator() {
        let buffer = draw(&ViewState::new(), 60, 10);
        assert!(text(&buffer).contains("Loading weather data..."));
    }

    #[test]
    fn error_view_shows_message() {
        let buffer = draw(&state_in(Status::Errored), 80, 12);
        let screen = text(&buffer);

        assert!(screen.contains("Error: weather API returned status: 503"));
        assert!(!screen.contains("Humidity"));

        let theme = Theme::dark();
        let cell = buffer.content().iter().find(|c| c.symbol() == "E").expect("error text drawn");
        assert_eq!(cell.bg, theme.error);
        assert_eq!(cell.fg, theme.accent);
    }

    #[test]
    fn card_shows_every_field() {
        let buffer = draw(&state_in(Status::Loaded), 80, 24);
        let screen = text(&buffer);

        for expected in ["Ankara, Turkey", "18°C", "Partly cloudy", "Humidity:", "60%", "Wind:", "12 km/h", "Press 'q'"] {
            assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
        }
    }

    #[test]
    fn card_is_top_left_before_first_resize() {
        let buffer = draw(&state_in(Status::Loaded), 80, 24);
        assert_eq!(card_corner(&buffer), Some((0, 0)));
    }

    #[test]
    fn card_is_centered_in_known_viewport() {
        let mut state = state_in(Status::Loaded);
        state.update(WeatherMessage::Resize { width: 100, height: 30 });

        let buffer = draw(&state, 100, 30);
        let (x, y) = card_corner(&buffer).expect("card should be drawn");

        assert_eq!(x, 25);
        assert_eq!(y, (30 - (CARD_HEIGHT + 2)) / 2);
    }

    #[test]
    fn narrow_viewport_shrinks_card() {
        let mut state = state_in(Status::Loaded);
        state.update(WeatherMessage::Resize { width: 40, height: 30 });

        let buffer = draw(&state, 40, 30);
        let (x, _) = card_corner(&buffer).expect("card should be drawn");

        // width is min(50, 40 - 4)
        assert_eq!(x, 2);
    }
}
