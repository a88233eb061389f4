use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use stopwatch_core::{format_duration, EngineState, TimerEngine};

const LAP_LIST_TOP: u16 = 6;

pub fn draw_stopwatch(
    out: &mut impl Write,
    engine: &TimerEngine,
    now_ms: u64,
    rows: u16,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("STOPWATCH"),
        SetAttribute(Attribute::Reset)
    )?;

    queue!(
        out,
        MoveTo(0, 2),
        SetAttribute(Attribute::Bold),
        Print(format_duration(engine.elapsed_ms(now_ms))),
        SetAttribute(Attribute::Reset)
    )?;
    queue!(out, MoveTo(0, 3), Print(state_label(engine.state)))?;
    queue!(
        out,
        MoveTo(0, 4),
        Print("ENTER=start/pause  l=lap  r=reset  q=quit")
    )?;

    // Laps come back newest first; draw as many as fit the window.
    let visible = rows.saturating_sub(LAP_LIST_TOP) as usize;
    for (i, lap) in engine.laps().iter().take(visible).enumerate() {
        queue!(
            out,
            MoveTo(0, LAP_LIST_TOP + i as u16),
            Print(format!(
                "Lap {:<3} {}",
                lap.ordinal,
                format_duration(lap.elapsed_ms)
            ))
        )?;
    }

    out.flush()
}

fn state_label(state: EngineState) -> &'static str {
    match state {
        EngineState::Stopped => "stopped",
        EngineState::Running => "running",
        EngineState::Paused => "paused",
    }
}
