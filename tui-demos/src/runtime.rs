//! Message-driven terminal runtime.
//!
//! A [`Program`] owns its state and reacts to one message at a time. The
//! runtime turns terminal input and finished background tasks into messages,
//! calls [`Program::update`] for each, and redraws after every update until a
//! [`Command::Quit`] comes back.

use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{future::Future, io, pin::Pin, time::Duration};
use tokio::sync::mpsc;

pub type Task<M> = Pin<Box<dyn Future<Output = M> + Send + 'static>>;

/// Side effect requested by `init` or `update`.
pub enum Command<M> {
    None,
    Quit,
    /// Run a future in the background; its output comes back as a message.
    Perform(Task<M>),
    Batch(Vec<Command<M>>),
}

impl<M: Send + 'static> Command<M> {
    pub fn perform<F>(future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Command::Perform(Box::pin(future))
    }

    /// Deliver `message` after `delay`.
    pub fn tick(delay: Duration, message: M) -> Self {
        Self::perform(async move {
            tokio::time::sleep(delay).await;
            message
        })
    }

    pub fn batch(commands: impl IntoIterator<Item = Command<M>>) -> Self {
        Command::Batch(commands.into_iter().collect())
    }
}

pub trait Program {
    type Message: Send + 'static;

    /// Startup work, run once before the first frame.
    fn init(&mut self) -> Command<Self::Message>;

    fn update(&mut self, message: Self::Message) -> Command<Self::Message>;

    fn view(&self, frame: &mut Frame);

    /// Map a terminal event to a message; `None` drops the event.
    fn translate(&self, event: Event) -> Option<Self::Message>;
}

/// Run `program` on the real terminal, restoring it on every exit path.
pub async fn run<P: Program>(program: &mut P) -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = terminal::disable_raw_mode();
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut term = match Terminal::new(backend) {
        Ok(term) => term,
        Err(err) => {
            let _ = restore_terminal(&mut io::stdout());
            return Err(err.into());
        }
    };

    let result = run_with(&mut term, program, EventStream::new()).await;

    let restored = restore_terminal(term.backend_mut()).and_then(|()| term.show_cursor());
    finish(result, restored)
}

/// The loop's own error wins over a failure to restore the terminal.
fn finish(result: anyhow::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    result?;
    Ok(restored?)
}

fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

/// Event loop over an arbitrary backend and input stream.
pub async fn run_with<P, B, S>(
    terminal: &mut Terminal<B>,
    program: &mut P,
    mut events: S,
) -> anyhow::Result<()>
where
    P: Program,
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut quit = dispatch(program.init(), &tx);

    if !quit {
        let size = terminal.size()?;
        if let Some(message) = program.translate(Event::Resize(size.width, size.height)) {
            quit = dispatch(program.update(message), &tx);
        }
    }

    let mut input_open = true;
    while !quit {
        terminal.draw(|frame| program.view(frame))?;

        let message = tokio::select! {
            Some(message) = rx.recv() => message,
            event = events.next(), if input_open => match event {
                Some(Ok(event)) => match program.translate(event) {
                    Some(message) => message,
                    None => continue,
                },
                Some(Err(err)) => return Err(err.into()),
                None => {
                    tracing::debug!("terminal input closed");
                    input_open = false;
                    continue;
                }
            },
        };

        quit = dispatch(program.update(message), &tx);
    }

    // final frame, like the last view after quitting
    terminal.draw(|frame| program.view(frame))?;
    Ok(())
}

/// Spawn background work; returns `true` when the command asks to quit.
fn dispatch<M: Send + 'static>(command: Command<M>, tx: &mpsc::UnboundedSender<M>) -> bool {
    match command {
        Command::None => false,
        Command::Quit => true,
        Command::Perform(task) => {
            let tx = tx.clone();
            tokio::spawn(async move {
                // receiver is gone once the loop has exited
                let _ = tx.send(task.await);
            });
            false
        }
        Command::Batch(commands) => commands
            .into_iter()
            .fold(false, |quit, command| dispatch(command, tx) || quit),
    }
}
