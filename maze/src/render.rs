use glam::Vec2;

use crate::cell::Walls;

/// Pixel rectangle covered by one cell, computed by the maze from its origin
/// and cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl CellBounds {
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Drawing capability the maze notifies as it mutates. Calls are synchronous
/// and best-effort: implementations return nothing and must not abort
/// generation or solving. The data model never depends on what a renderer
/// does with them.
pub trait Renderer {
    /// A cell's rectangle and its current wall flags, sent whenever the
    /// cell's walls change.
    fn draw_cell(&mut self, bounds: CellBounds, walls: Walls);

    /// A traversal step between two adjacent cells during solving. `undo`
    /// marks an edge the solver backtracked out of; it is cosmetic only.
    fn draw_move(&mut self, from: CellBounds, to: CellBounds, undo: bool);

    /// Drives the host redraw/update cycle after a batch of draw calls.
    fn tick(&mut self);
}

/// Stands in when no renderer is attached, so the algorithms never check for
/// one.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_cell(&mut self, _bounds: CellBounds, _walls: Walls) {}

    fn draw_move(&mut self, _from: CellBounds, _to: CellBounds, _undo: bool) {}

    fn tick(&mut self) {}
}
