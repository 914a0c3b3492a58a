use std::io::{self, Stdout, Write, stdout};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use maze::{CellBounds, Renderer, Walls};

/// Draws the maze onto a terminal, one character per logical pixel. Wall
/// corners stay as posts so cleared walls read as gaps; solver moves are
/// plotted between cell centers, red going forward and dimmed when undone.
///
/// Rendering is best-effort by contract: write errors are swallowed so a
/// broken terminal can never abort generation or solving.
pub struct TerminalRenderer<W: Write> {
    out: W,
    frame_delay: Duration,
}

impl TerminalRenderer<Stdout> {
    pub fn new(frame_delay: Duration) -> TerminalRenderer<Stdout> {
        TerminalRenderer {
            out: stdout(),
            frame_delay,
        }
    }
}

impl<W: Write> TerminalRenderer<W> {
    fn put(&mut self, x: f32, y: f32, glyph: char) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(x.round() as u16, y.round() as u16),
            Print(glyph)
        )
    }

    fn draw_cell_walls(&mut self, bounds: CellBounds, walls: Walls) -> io::Result<()> {
        let CellBounds { min, max } = bounds;

        // Corner posts are always present; only the spans between them open
        // up when a wall is cleared.
        for (x, y) in [(min.x, min.y), (max.x, min.y), (min.x, max.y), (max.x, max.y)] {
            self.put(x, y, '+')?;
        }

        let horizontal = |present: bool| if present { '-' } else { ' ' };
        let vertical = |present: bool| if present { '|' } else { ' ' };

        let mut x = min.x + 1.0;
        while x < max.x {
            self.put(x, min.y, horizontal(walls.top))?;
            self.put(x, max.y, horizontal(walls.bottom))?;
            x += 1.0;
        }

        let mut y = min.y + 1.0;
        while y < max.y {
            self.put(min.x, y, vertical(walls.left))?;
            self.put(max.x, y, vertical(walls.right))?;
            y += 1.0;
        }

        Ok(())
    }

    fn draw_move_line(&mut self, from: CellBounds, to: CellBounds, undo: bool) -> io::Result<()> {
        let color = if undo { Color::DarkGrey } else { Color::Red };
        queue!(self.out, SetForegroundColor(color))?;

        let (a, b) = (from.center(), to.center());
        let steps = (b - a).abs().max_element().round() as i32;
        for step in 0..=steps {
            let point = a.lerp(b, step as f32 / steps.max(1) as f32);
            self.put(point.x, point.y, '*')?;
        }

        queue!(self.out, ResetColor)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_cell(&mut self, bounds: CellBounds, walls: Walls) {
        self.draw_cell_walls(bounds, walls).ok();
    }

    fn draw_move(&mut self, from: CellBounds, to: CellBounds, undo: bool) {
        self.draw_move_line(from, to, undo).ok();
    }

    fn tick(&mut self) {
        self.out.flush().ok();
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}
