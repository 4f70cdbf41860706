use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use stories_core::{update, AppState, Msg, SEARCH_KEY};
use stories_engine::{
    FetchSettings, Fetcher, FileStore, KeyValueStore, MemoryStore, PersistedField, ReqwestFetcher,
};
use stories_logging::{stories_info, stories_warn};

use crate::effects::EffectRunner;
use crate::input::{self, Command, InputError};
use crate::render;

pub struct AppConfig {
    pub endpoint: String,
    /// `None` keeps the search term in memory only.
    pub state_file: Option<PathBuf>,
    pub fetch: FetchSettings,
}

/// Everything the dispatch loop reacts to.
#[derive(Debug)]
pub enum LoopEvent {
    Input(Command),
    InvalidInput(InputError),
    InputClosed,
    Engine(Msg),
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let store: Box<dyn KeyValueStore> = match &config.state_file {
        Some(path) => Box::new(FileStore::open(path)),
        None => Box::new(MemoryStore::new()),
    };
    let fetcher = Arc::new(ReqwestFetcher::new(config.fetch));
    let (loop_tx, loop_rx) = mpsc::channel();

    let mut app = App::new(&config.endpoint, store, fetcher, loop_tx.clone(), io::stdout())
        .context("failed to start the request engine")?;
    spawn_input_reader(loop_tx).context("failed to start the input reader")?;

    app.start().context("failed to write to stdout")?;
    for event in loop_rx {
        if !app.handle_event(event).context("failed to write to stdout")? {
            break;
        }
    }
    stories_info!("Exiting");
    Ok(())
}

/// Owns the state and feeds it through `update`, one event at a time.
pub struct App<S, W> {
    state: AppState,
    runner: EffectRunner<S>,
    out: W,
    input_closed: bool,
}

impl<S: KeyValueStore, W: Write> App<S, W> {
    pub fn new(
        endpoint: &str,
        store: S,
        fetcher: Arc<dyn Fetcher>,
        loop_tx: mpsc::Sender<LoopEvent>,
        out: W,
    ) -> io::Result<Self> {
        let term = PersistedField::create(store, SEARCH_KEY, "");
        stories_info!("Starting with search term {:?}", term.value());
        let state = AppState::new(endpoint, term.value());
        let runner = EffectRunner::new(fetcher, term, loop_tx)?;
        Ok(Self {
            state,
            runner,
            out,
            input_closed: false,
        })
    }

    /// Prints the help and issues the request for the restored term.
    pub fn start(&mut self) -> io::Result<()> {
        self.write_lines(render::help())?;
        self.dispatch_msg(Msg::Tick);
        self.render_if_dirty()
    }

    /// Returns `false` once the loop should stop.
    pub fn handle_event(&mut self, event: LoopEvent) -> io::Result<bool> {
        match event {
            LoopEvent::Engine(msg) => self.dispatch_msg(msg),
            LoopEvent::Input(Command::Quit) => return Ok(false),
            LoopEvent::Input(Command::Help) => self.write_lines(render::help())?,
            LoopEvent::Input(Command::Show) => self.render()?,
            LoopEvent::Input(command) => match input::to_msgs(command, &self.state.view()) {
                Ok(msgs) => msgs.into_iter().for_each(|msg| self.dispatch_msg(msg)),
                Err(err) => writeln!(self.out, "{err}")?,
            },
            LoopEvent::InvalidInput(err) => writeln!(self.out, "{err}")?,
            LoopEvent::InputClosed => self.input_closed = true,
        }
        self.render_if_dirty()?;

        // With no more input, stay only until the last response has been shown.
        Ok(!(self.input_closed && self.state.in_flight().is_none()))
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn render_if_dirty(&mut self) -> io::Result<()> {
        if self.state.consume_dirty() {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let lines = render::render(&self.state.view());
        for line in &lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_lines<'a>(&mut self, lines: impl Iterator<Item = &'a str>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

fn spawn_input_reader(loop_tx: mpsc::Sender<LoopEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("stories-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let event = match line {
                    Ok(line) => match input::parse_command(&line) {
                        Ok(Some(command)) => LoopEvent::Input(command),
                        Ok(None) => continue,
                        Err(err) => LoopEvent::InvalidInput(err),
                    },
                    Err(err) => {
                        stories_warn!("Failed to read input: {}", err);
                        break;
                    }
                };
                if loop_tx.send(event).is_err() {
                    return;
                }
            }
            let _ = loop_tx.send(LoopEvent::InputClosed);
        })?;
    Ok(())
}
