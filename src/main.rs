mod clock;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use stopwatch_core::{EngineState, TimerEngine};

use crate::clock::Clock;

// Display-refresh cadence while the stopwatch is running. When nothing on
// screen moves, the poll only has to wake up for keys.
const RUNNING_POLL: Duration = Duration::from_millis(10);
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, PartialEq, Debug)]
enum Intent {
    ToggleStartPause,
    Lap,
    Reset,
    Quit,
}

fn intent_for(key: &KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::ToggleStartPause),
        KeyCode::Char('l') => Some(Intent::Lap),
        KeyCode::Char('r') => Some(Intent::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

struct StopwatchApp {
    engine: TimerEngine,
    clock: Clock,
}

impl StopwatchApp {
    fn new() -> Self {
        Self {
            engine: TimerEngine::new(),
            clock: Clock::new(),
        }
    }

    /// Applies a user intent to the engine. Returns false when the app
    /// should exit.
    fn apply(&mut self, intent: Intent) -> bool {
        let now = self.clock.now_ms();
        match intent {
            Intent::ToggleStartPause => match self.engine.state {
                EngineState::Running => {
                    self.engine.pause(now);
                    log::debug!("paused at {} ms", self.engine.elapsed_ms(now));
                }
                EngineState::Stopped | EngineState::Paused => {
                    self.engine.start(now);
                    log::debug!("running");
                }
            },
            Intent::Lap => {
                if let Some(lap) = self.engine.record_lap(now) {
                    log::debug!("lap {} at {} ms", lap.ordinal, lap.elapsed_ms);
                }
            }
            Intent::Reset => {
                self.engine.reset();
                log::debug!("reset");
            }
            Intent::Quit => return false,
        }
        true
    }

    fn poll_timeout(&self) -> Duration {
        if self.engine.state == EngineState::Running {
            RUNNING_POLL
        } else {
            IDLE_POLL
        }
    }
}

fn run(app: &mut StopwatchApp, out: &mut io::Stdout) -> Result<()> {
    loop {
        let (_cols, rows) = terminal::size()?;
        ui::draw_stopwatch(out, &app.engine, app.clock.now_ms(), rows)?;

        if event::poll(app.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                if let Some(intent) = intent_for(&key) {
                    if !app.apply(intent) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("stopwatch starting");

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let mut app = StopwatchApp::new();
    let result = run(&mut app, &mut out);

    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    log::info!("stopwatch exiting");
    result
}
