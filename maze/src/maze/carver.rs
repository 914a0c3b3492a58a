use crate::maze::Maze;

/// Randomized depth-first carving. Turns the fully walled grid into a
/// spanning tree: every cell reachable, no cycles, exactly rows x cols - 1
/// interior walls cleared.
pub(crate) trait Carve {
    fn carve(&mut self);
}

impl Carve for Maze {
    fn carve(&mut self) {
        self.reset_visited();
        self.mark_visited(0, 0);

        // Depth is bounded by rows x cols, so the walk keeps its own stack
        // instead of recursing.
        let mut stack = vec![(0usize, 0usize)];

        while let Some((row, col)) = stack.pop() {
            let Some(direction) = self.pick_unvisited_direction(row, col) else {
                // Dead end for carving purposes: backtrack.
                continue;
            };

            let (nrow, ncol) = self
                .neighbor(row, col, direction)
                .expect("picked directions stay inside the grid");

            stack.push((row, col));

            self.clear_wall_between(row, col, direction);
            self.mark_visited(nrow, ncol);
            self.draw_cell(row, col);
            self.draw_cell(nrow, ncol);

            stack.push((nrow, ncol));
        }
    }
}
