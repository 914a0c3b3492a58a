use std::cell::RefCell;
use std::rc::Rc;

use crate::cell::Walls;
use crate::render::{CellBounds, Renderer};

/// One recorded `draw_move` notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRecord {
    pub from: CellBounds,
    pub to: CellBounds,
    pub undo: bool,
}

/// Everything a `RecordingRenderer` has been asked to draw, in order.
#[derive(Default)]
pub struct RenderLog {
    /// Cell notifications from construction and carving: the bounds and the
    /// wall flags as they stood at the time of the call.
    pub cell_draws: Vec<(CellBounds, Walls)>,
    /// Move notifications from solving, forward and undo alike.
    pub moves: Vec<MoveRecord>,
    /// How many times the redraw cycle was driven.
    pub ticks: usize,
}

/// Renderer double for tests. The maze takes ownership of the boxed
/// renderer, so the log lives behind a shared handle: clone one out with
/// `log()` before boxing, then read it back after generation or solving.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        RecordingRenderer::default()
    }

    pub fn log(&self) -> Rc<RefCell<RenderLog>> {
        Rc::clone(&self.log)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_cell(&mut self, bounds: CellBounds, walls: Walls) {
        self.log.borrow_mut().cell_draws.push((bounds, walls));
    }

    fn draw_move(&mut self, from: CellBounds, to: CellBounds, undo: bool) {
        self.log.borrow_mut().moves.push(MoveRecord { from, to, undo });
    }

    fn tick(&mut self) {
        self.log.borrow_mut().ticks += 1;
    }
}
