pub mod cell;
pub mod maze;
pub mod render;
pub mod test_helpers;

pub use cell::{Cell, Direction, Walls};
pub use maze::solver::Solve;
pub use maze::{ConfigurationError, Maze};
pub use render::{CellBounds, NullRenderer, Renderer};
