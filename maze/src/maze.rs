mod carver;
pub mod solver;

use std::{error, fmt};

use glam::Vec2;
use rand::prelude::{IndexedRandom, SeedableRng, StdRng};

use crate::cell::{Cell, Direction};
use crate::render::{CellBounds, NullRenderer, Renderer};
use carver::Carve;

/// Returned by `Maze::new` when either dimension is zero. Generation is
/// infallible for any other dimension pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConfigurationError {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "maze dimensions must be at least 1x1, got {}x{}",
            self.rows, self.cols
        )
    }
}

impl error::Error for ConfigurationError {}

/// A rectangular grid of cells whose cleared walls form a spanning tree.
///
/// Construction allocates the grid with every wall present, opens the
/// entrance and exit, and runs the randomized carving walk before returning,
/// so a freshly built maze is always complete and solvable. The attached
/// renderer (a no-op one when `None` is supplied) is notified after each
/// mutation; it never influences the layout.
pub struct Maze {
    origin: Vec2,
    cell_size: Vec2,
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    rng: StdRng,
    renderer: Box<dyn Renderer>,
}

impl Maze {
    pub fn new(
        origin: Vec2,
        rows: usize,
        cols: usize,
        cell_size: Vec2,
        renderer: Option<Box<dyn Renderer>>,
        seed: Option<u64>,
    ) -> Result<Maze, ConfigurationError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError { rows, cols });
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(row, col)).collect())
            .collect();

        let mut maze = Maze {
            origin,
            cell_size,
            rows,
            cols,
            cells,
            rng,
            renderer: renderer.unwrap_or_else(|| Box::new(NullRenderer)),
        };

        maze.draw_all_cells();
        maze.break_entrance_and_exit();
        maze.carve();
        maze.reset_visited();

        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Coordinates of the adjacent cell in the given direction, or `None` at
    /// the grid edge.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (drow, dcol) = direction.offset();
        let nrow = row.checked_add_signed(drow)?;
        let ncol = col.checked_add_signed(dcol)?;

        (nrow < self.rows && ncol < self.cols).then_some((nrow, ncol))
    }

    /// Pixel rectangle of the cell at (row, col), derived from the maze
    /// origin and cell size.
    pub fn bounds(&self, row: usize, col: usize) -> CellBounds {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell coordinates are out of bounds"
        );

        let min = self.origin + Vec2::new(col as f32, row as f32) * self.cell_size;
        CellBounds {
            min,
            max: min + self.cell_size,
        }
    }

    /// The two fixed openings: the entrance at (0,0)'s top wall and the exit
    /// at (R-1,C-1)'s bottom wall. Carved once, independent of the RNG, and
    /// never re-closed.
    fn break_entrance_and_exit(&mut self) {
        self.cells[0][0].set_wall(Direction::Up, false);
        self.cells[self.rows - 1][self.cols - 1].set_wall(Direction::Down, false);

        self.draw_cell(0, 0);
        self.draw_cell(self.rows - 1, self.cols - 1);
    }

    /// Clears the wall pair between (row, col) and its neighbor: the facing
    /// walls on both cells, so the passage reads the same from either side.
    pub(crate) fn clear_wall_between(&mut self, row: usize, col: usize, direction: Direction) {
        let (nrow, ncol) = self
            .neighbor(row, col, direction)
            .expect("walls are only cleared toward cells inside the grid");

        self.cells[row][col].set_wall(direction, false);
        self.cells[nrow][ncol].set_wall(direction.opposite(), false);
    }

    pub(crate) fn mark_visited(&mut self, row: usize, col: usize) {
        self.cells[row][col].mark_visited();
    }

    /// Visited flags are traversal-scoped: carving and solving each start
    /// from a clean slate rather than inheriting the other phase's marks.
    pub(crate) fn reset_visited(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.clear_visited();
            }
        }
    }

    /// Unvisited in-bounds neighbors of (row, col), in the fixed candidate
    /// order. The carver draws uniformly from this list, never from all four
    /// directions with rejection.
    pub(crate) fn unvisited_directions(&self, row: usize, col: usize) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                self.neighbor(row, col, direction)
                    .is_some_and(|(nrow, ncol)| !self.cells[nrow][ncol].is_visited())
            })
            .collect()
    }

    pub(crate) fn pick_unvisited_direction(&mut self, row: usize, col: usize) -> Option<Direction> {
        let candidates = self.unvisited_directions(row, col);

        candidates.choose(&mut self.rng).copied()
    }

    fn draw_all_cells(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.draw_cell(row, col);
            }
        }
    }

    pub(crate) fn draw_cell(&mut self, row: usize, col: usize) {
        let bounds = self.bounds(row, col);
        let walls = self.cells[row][col].walls();

        self.renderer.draw_cell(bounds, walls);
        self.renderer.tick();
    }

    pub(crate) fn draw_move(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
        undo: bool,
    ) {
        let from_bounds = self.bounds(from.0, from.1);
        let to_bounds = self.bounds(to.0, to.1);

        self.renderer.draw_move(from_bounds, to_bounds, undo);
        self.renderer.tick();
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let mut upper = String::new();
            let mut body = String::new();

            for col in 0..self.cols {
                let cell = &self.cells[row][col];
                upper.push('+');
                upper.push_str(if cell.has_wall(Direction::Up) {
                    "---"
                } else {
                    "   "
                });
                body.push(if cell.has_wall(Direction::Left) {
                    '|'
                } else {
                    ' '
                });
                body.push_str("   ");
            }

            upper.push('+');
            body.push(if self.cells[row][self.cols - 1].has_wall(Direction::Right) {
                '|'
            } else {
                ' '
            });

            writeln!(f, "{}", upper)?;
            writeln!(f, "{}", body)?;
        }

        let mut bottom = String::new();
        for col in 0..self.cols {
            bottom.push('+');
            bottom.push_str(if self.cells[self.rows - 1][col].has_wall(Direction::Down) {
                "---"
            } else {
                "   "
            });
        }
        bottom.push('+');

        writeln!(f, "{}", bottom)
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;

    fn build(rows: usize, cols: usize, seed: u64) -> Maze {
        Maze::new(vec2(0.0, 0.0), rows, cols, vec2(10.0, 10.0), None, Some(seed))
            .expect("dimensions are valid")
    }

    #[test]
    fn grid_has_requested_dimensions() {
        let maze = build(10, 12, 0);
        assert_eq!(maze.rows(), 10);
        assert_eq!(maze.cols(), 12);
        assert_eq!(maze.cells.len(), 10);
        assert_eq!(maze.cells[0].len(), 12);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let no_rows = Maze::new(vec2(0.0, 0.0), 0, 5, vec2(10.0, 10.0), None, None);
        assert_eq!(no_rows.err(), Some(ConfigurationError { rows: 0, cols: 5 }));

        let no_cols = Maze::new(vec2(0.0, 0.0), 5, 0, vec2(10.0, 10.0), None, None);
        assert_eq!(no_cols.err(), Some(ConfigurationError { rows: 5, cols: 0 }));
    }

    #[test]
    fn configuration_error_names_the_offending_pair() {
        let error = ConfigurationError { rows: 0, cols: 7 };
        assert_eq!(
            error.to_string(),
            "maze dimensions must be at least 1x1, got 0x7"
        );
    }

    #[test]
    fn entrance_and_exit_are_open_after_construction() {
        let maze = build(5, 5, 3);

        let entrance = maze.cell(0, 0);
        assert!(!entrance.has_wall(Direction::Up));

        let exit = maze.cell(4, 4);
        assert!(!exit.has_wall(Direction::Down));
    }

    #[test]
    fn boundary_walls_stay_intact_apart_from_the_openings() {
        let maze = build(6, 7, 11);

        for col in 0..maze.cols() {
            if col != 0 {
                assert!(maze.cell(0, col).has_wall(Direction::Up));
            }
            if col != maze.cols() - 1 {
                assert!(maze.cell(maze.rows() - 1, col).has_wall(Direction::Down));
            }
        }
        for row in 0..maze.rows() {
            assert!(maze.cell(row, 0).has_wall(Direction::Left));
            assert!(maze.cell(row, maze.cols() - 1).has_wall(Direction::Right));
        }
    }

    #[test]
    fn visited_flags_are_clear_after_construction() {
        let maze = build(8, 8, 5);

        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                assert!(!maze.cell(row, col).is_visited());
            }
        }
    }

    #[test]
    fn neighbor_respects_the_grid_edges() {
        let maze = build(3, 3, 0);

        assert_eq!(maze.neighbor(0, 0, Direction::Up), None);
        assert_eq!(maze.neighbor(0, 0, Direction::Left), None);
        assert_eq!(maze.neighbor(0, 0, Direction::Right), Some((0, 1)));
        assert_eq!(maze.neighbor(0, 0, Direction::Down), Some((1, 0)));

        assert_eq!(maze.neighbor(2, 2, Direction::Down), None);
        assert_eq!(maze.neighbor(2, 2, Direction::Right), None);
        assert_eq!(maze.neighbor(2, 2, Direction::Up), Some((1, 2)));
        assert_eq!(maze.neighbor(2, 2, Direction::Left), Some((2, 1)));
    }

    #[test]
    fn bounds_place_cells_on_the_pixel_grid() {
        let maze = Maze::new(
            vec2(10.0, 10.0),
            2,
            2,
            vec2(20.0, 20.0),
            None,
            Some(0),
        )
        .expect("dimensions are valid");

        let top_left = maze.bounds(0, 0);
        assert_eq!(top_left.min, vec2(10.0, 10.0));
        assert_eq!(top_left.max, vec2(30.0, 30.0));

        let top_right = maze.bounds(0, 1);
        assert_eq!(top_right.min, vec2(30.0, 10.0));
        assert_eq!(top_right.max, vec2(50.0, 30.0));

        let bottom_left = maze.bounds(1, 0);
        assert_eq!(bottom_left.min, vec2(10.0, 30.0));
        assert_eq!(bottom_left.max, vec2(30.0, 50.0));

        let bottom_right = maze.bounds(1, 1);
        assert_eq!(bottom_right.min, vec2(30.0, 30.0));
        assert_eq!(bottom_right.max, vec2(50.0, 50.0));
    }

    #[test]
    fn display_draws_every_wall_row() {
        let maze = build(3, 4, 9);
        let picture = maze.to_string();

        // One line per cell row for walls-above, one for the cells, plus the
        // closing bottom edge.
        assert_eq!(picture.lines().count(), 3 * 2 + 1);
        for line in picture.lines() {
            assert_eq!(line.chars().count(), 4 * 4 + 1);
        }
    }
}
