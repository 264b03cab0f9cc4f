use std::io::{self, BufRead, Stdout, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use sentiment_core::{generate, update, AppState, AppViewModel, Msg};

use super::config::load_config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::terminal::Terminal;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub struct LaunchOptions {
    pub config_path: PathBuf,
    pub base_url: Option<String>,
    pub log: LogDestination,
    pub orb_count: Option<usize>,
}

#[derive(Debug, PartialEq)]
enum Inbox {
    Dispatch(Msg),
    /// Stop reading input; exits once nothing is outstanding.
    Quit,
}

pub fn run_app(options: LaunchOptions) -> anyhow::Result<()> {
    logging::initialize(options.log);

    let mut config = load_config(&options.config_path);
    if let Some(base_url) = options.base_url {
        config.base_url = base_url;
    }
    if let Some(orb_count) = options.orb_count {
        config.orb_count = orb_count;
    }
    engine_info!("Starting with service base URL {}", config.base_url);

    let orbs = generate(config.orb_count);
    for orb in &orbs {
        engine_debug!(
            "Orb {}: {}px at ({}%, {}%) {:?}->{:?} over {}s",
            orb.id,
            orb.size,
            orb.left_percent,
            orb.top_percent,
            orb.color_from,
            orb.color_to,
            orb.duration_seconds
        );
    }

    let runner = EffectRunner::new(config.predict_settings())?;
    let mut app = App::new(Terminal::new(io::stdout()), runner);
    app.terminal.execute(ui::layout::initial_commands(&orbs))?;

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    spawn_input_reader(inbox_tx.clone());
    spawn_ticker(inbox_tx);

    let mut quitting = false;
    loop {
        match inbox_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Inbox::Dispatch(msg)) => app.dispatch_msg(msg)?,
            Ok(Inbox::Quit) => quitting = true,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        for msg in app.runner.drain() {
            app.dispatch_msg(msg)?;
        }
        if quitting && app.state.in_flight().is_none() {
            break;
        }
    }

    writeln!(io::stdout())?;
    engine_info!("Exiting");
    Ok(())
}

struct App {
    state: AppState,
    last_view: Option<AppViewModel>,
    terminal: Terminal<Stdout>,
    runner: EffectRunner,
}

impl App {
    fn new(terminal: Terminal<Stdout>, runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            last_view: Some(ui::render::startup_view()),
            terminal,
            runner,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.run(effects);

        if was_dirty {
            let view = self.state.view();
            let commands = ui::render::render(self.last_view.as_ref(), &view);
            self.terminal.execute(commands)?;
            self.last_view = Some(view);
        }
        Ok(())
    }
}

fn spawn_input_reader(tx: mpsc::Sender<Inbox>) {
    thread::spawn(move || read_inbox(io::stdin().lock(), &tx));
}

// Each line is one submission. A line that is not valid UTF-8 is submitted as
// empty so it fails validation instead of ending the session.
fn read_inbox<R: BufRead>(mut reader: R, tx: &mpsc::Sender<Inbox>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                engine_warn!("Failed to read input: {}", err);
                break;
            }
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(err) => {
                engine_warn!("Ignoring input that is not valid UTF-8: {}", err);
                String::new()
            }
        };
        if ui::constants::QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }
        let sent = tx.send(Inbox::Dispatch(Msg::InputChanged(line))).is_ok()
            && tx.send(Inbox::Dispatch(Msg::AnalyzeClicked)).is_ok();
        if !sent {
            return;
        }
    }
    let _ = tx.send(Inbox::Quit);
}

// Drives the busy spinner.
fn spawn_ticker(tx: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        while tx.send(Inbox::Dispatch(Msg::Tick)).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });
}
