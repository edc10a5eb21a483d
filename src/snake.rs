use std::collections::{HashSet, VecDeque};

use crate::grid::GridSize;
use crate::input::Direction;

/// Grid coordinate in (row, col) order, matching the board layout.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Returns true when the cell lies inside the grid bounds.
    #[must_use]
    pub fn is_within(self, grid: GridSize) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i32::from(grid.rows)
            && self.col < i32::from(grid.cols)
    }

    /// Returns the adjacent cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                row: self.row - 1,
                col: self.col,
            },
            Direction::Down => Self {
                row: self.row + 1,
                col: self.col,
            },
            Direction::Left => Self {
                row: self.row,
                col: self.col - 1,
            },
            Direction::Right => Self {
                row: self.row,
                col: self.col + 1,
            },
        }
    }
}

/// Ordered snake body, head first, with an occupancy index.
///
/// The index is maintained incrementally on every body change so collision
/// checks and food placement get O(1) expected membership tests instead of
/// a scan over the sequence.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Segments must be distinct; the body must not be empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        let occupied: HashSet<Cell> = segments.iter().copied().collect();
        debug_assert!(!segments.is_empty());
        debug_assert_eq!(occupied.len(), segments.len());

        Self {
            body: VecDeque::from(segments),
            occupied,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Prepends `new_head` and drops the tail unless `grow` is set.
    ///
    /// The caller must have ruled out `new_head` colliding with the body;
    /// this only applies the shift-or-grow rule and keeps the occupancy
    /// index in sync.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        debug_assert!(!self.occupied.contains(&new_head));

        self.body.push_front(new_head);
        self.occupied.insert(new_head);

        if !grow {
            if let Some(tail) = self.body.pop_back() {
                self.occupied.remove(&tail);
            }
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Returns the number of distinct occupied cells.
    ///
    /// Always equals `len()` while the no-duplicates invariant holds.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}
