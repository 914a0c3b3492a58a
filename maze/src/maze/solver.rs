use crate::cell::Direction;
use crate::maze::Maze;

/// Depth-first search from the entrance at (0,0) to the exit at
/// (rows-1, cols-1), respecting the carved walls. On any generated maze the
/// passages form a spanning tree, so exactly one route exists and `solve`
/// returns true; false is only reachable on a grid that did not come out of
/// the carver.
pub trait Solve {
    fn solve(&mut self) -> bool;
}

/// One suspended visit: which cell, and which candidate direction to try
/// next when search returns here.
struct Frame {
    row: usize,
    col: usize,
    next_candidate: usize,
}

impl Solve for Maze {
    fn solve(&mut self) -> bool {
        self.reset_visited();
        self.mark_visited(0, 0);

        let exit = (self.rows() - 1, self.cols() - 1);
        let mut stack = vec![Frame {
            row: 0,
            col: 0,
            next_candidate: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let (row, col) = (frame.row, frame.col);

            if (row, col) == exit {
                return true;
            }

            let mut descent = None;
            while frame.next_candidate < Direction::ALL.len() {
                let direction = Direction::ALL[frame.next_candidate];
                frame.next_candidate += 1;

                if self.cell(row, col).has_wall(direction) {
                    continue;
                }
                // The entrance and exit openings face out of the grid; a
                // cleared wall is only passable when a neighbor exists.
                let Some((nrow, ncol)) = self.neighbor(row, col, direction) else {
                    continue;
                };
                if self.cell(nrow, ncol).is_visited() {
                    continue;
                }

                descent = Some((nrow, ncol));
                break;
            }

            match descent {
                Some((nrow, ncol)) => {
                    self.draw_move((row, col), (nrow, ncol), false);
                    self.mark_visited(nrow, ncol);
                    stack.push(Frame {
                        row: nrow,
                        col: ncol,
                        next_candidate: 0,
                    });
                }
                None => {
                    // Dead end. The undo notification is cosmetic: the cell
                    // stays visited so the search never re-enters it.
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        self.draw_move((parent.row, parent.col), (row, col), true);
                    }
                }
            }
        }

        false
    }
}
