/// One of the four grid directions. Carving and solving both try candidates
/// in the order given by `ALL`, so a seeded maze comes out the same every run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Row and column deltas of the neighbor in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Wall flags for one cell, indexable by direction. `true` means the wall
/// is present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub fn solid() -> Walls {
        Walls {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Up => self.top = present,
            Direction::Right => self.right = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
        }
    }
}

/// One grid position: fixed coordinates, wall flags, and a transient visited
/// marker. The cell holds no algorithmic logic; carving and solving live on
/// the maze.
#[derive(Clone, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    walls: Walls,
    visited: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            walls: Walls::solid(),
            visited: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls.set(direction, present);
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn clear_visited(&mut self) {
        self.visited = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_all_walls_and_is_unvisited() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
        assert_eq!(cell.walls(), Walls::solid());
        assert!(!cell.is_visited());
    }

    #[test]
    fn clearing_one_wall_leaves_the_others() {
        let mut cell = Cell::new(0, 0);
        cell.set_wall(Direction::Right, false);

        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Up));
        assert!(cell.has_wall(Direction::Down));
        assert!(cell.has_wall(Direction::Left));
    }

    #[test]
    fn visited_marker_round_trips() {
        let mut cell = Cell::new(0, 0);
        cell.mark_visited();
        assert!(cell.is_visited());
        cell.clear_visited();
        assert!(!cell.is_visited());
    }

    #[test]
    fn opposites_pair_up() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn offsets_cancel_against_opposites() {
        for direction in Direction::ALL {
            let (drow, dcol) = direction.offset();
            let (orow, ocol) = direction.opposite().offset();
            assert_eq!(drow + orow, 0);
            assert_eq!(dcol + ocol, 0);
        }
    }

    #[test]
    fn walls_index_by_direction() {
        let mut walls = Walls::solid();
        walls.set(Direction::Down, false);

        assert!(!walls.has(Direction::Down));
        assert!(!walls.bottom);
        assert!(walls.top && walls.right && walls.left);
    }
}
