use crate::{config::GameConfig, WIN_LENGTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// A cell coordinate, row 0 is the top of the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

/// The four directions a line of pieces can run from its anchor cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row step, column step)
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// A `height` x `width` board of cells
///
/// The grid has no public mutators, pieces are only placed through
/// [`GameEngine::drop_piece`](crate::engine::GameEngine::drop_piece).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    height: usize,
    width: usize,
}

impl Grid {
    pub(crate) fn new(config: GameConfig) -> Self {
        Self {
            cells: vec![Cell::Empty; config.height() * config.width()],
            height: config.height(),
            width: config.width(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, column)`, or `None` outside the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            Some(self.cells[column + self.width * row])
        } else {
            None
        }
    }

    /// Iterates over the rows of the board from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    // the caller checks the column is on the board
    pub(crate) fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&row| self.cells[column + self.width * row].is_empty())
    }

    pub(crate) fn place(&mut self, position: Position, cell: Cell) {
        self.cells[position.column + self.width * position.row] = cell;
    }

    /// Checks every cell as the anchor of a line in every direction
    pub fn has_line(&self, cell: Cell) -> bool {
        if cell.is_empty() {
            return false;
        }
        (0..self.height).any(|row| {
            (0..self.width).any(|column| {
                Direction::ALL
                    .iter()
                    .any(|&direction| self.line_from(row, column, direction, cell))
            })
        })
    }

    /// Whether `WIN_LENGTH` cells starting at `(row, column)` and running in
    /// `direction` are all on the board and all hold `cell`
    pub fn line_from(&self, row: usize, column: usize, direction: Direction, cell: Cell) -> bool {
        let (dy, dx) = direction.step();
        (0..WIN_LENGTH as isize).all(|i| {
            let y = row as isize + dy * i;
            let x = column as isize + dx * i;
            y >= 0 && x >= 0 && self.get(y as usize, x as usize) == Some(cell)
        })
    }
}
