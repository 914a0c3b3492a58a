use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::{Vec2, vec2};

use maze::{Maze, Solve};

use crate::terminal::TerminalRenderer;

const NUM_ROWS: usize = 12;
const NUM_COLS: usize = 12;
const MARGIN: f32 = 2.0;
const FRAME_DELAY: Duration = Duration::from_millis(15);

enum Choice {
    Restart,
    Quit,
}

/// Puts the terminal into raw mode on an alternate screen and restores it
/// when dropped, so an early error cannot leave the shell unusable.
struct Screen;

impl Screen {
    fn new() -> io::Result<Screen> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        Ok(Screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        execute!(stdout(), Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

/// One round per loop: carve a fresh maze with the renderer attached, watch
/// it solve, then wait for the player to restart or quit.
pub fn run(seed: Option<u64>) -> io::Result<()> {
    let _screen = Screen::new()?;
    let cell_size = fit_cell_size();

    loop {
        execute!(stdout(), Clear(ClearType::All))?;

        let renderer = TerminalRenderer::new(FRAME_DELAY);
        let mut maze = Maze::new(
            vec2(MARGIN, MARGIN),
            NUM_ROWS,
            NUM_COLS,
            cell_size,
            Some(Box::new(renderer)),
            seed,
        )
        .expect("the fixed viewer dimensions are valid");

        let solved = maze.solve();
        show_result(solved, cell_size.y)?;

        match wait_for_choice()? {
            Choice::Restart => continue,
            Choice::Quit => return Ok(()),
        }
    }
}

/// Spreads the grid over the terminal the way the screen margin splits a
/// window, with a floor so tiny terminals still get readable cells.
fn fit_cell_size() -> Vec2 {
    let (cols, rows) = terminal::size().unwrap_or((80, 24));

    let width = ((cols as f32 - 2.0 * MARGIN) / NUM_COLS as f32).floor();
    let height = ((rows as f32 - 2.0 * MARGIN - 1.0) / NUM_ROWS as f32).floor();

    vec2(width.max(4.0), height.max(2.0))
}

fn show_result(solved: bool, cell_height: f32) -> io::Result<()> {
    let message = if solved {
        "Solved! Press r for a new maze, q to quit."
    } else {
        "No route found. Press r for a new maze, q to quit."
    };

    let below_maze = (MARGIN + NUM_ROWS as f32 * cell_height) as u16 + 2;
    execute!(stdout(), MoveTo(2, below_maze), Print(message))
}

fn wait_for_choice() -> io::Result<Choice> {
    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        if key_event.modifiers == KeyModifiers::CONTROL && key_event.code == KeyCode::Char('c') {
            return Ok(Choice::Quit);
        }

        match key_event.code {
            KeyCode::Char('r') | KeyCode::Char('R') => return Ok(Choice::Restart),
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Choice::Quit),
            _ => {}
        }
    }
}
