//! Board structure with move history

use super::{Cell, Player, Pos, DEFAULT_BOARD_SIZE};
use crate::error::GameError;

/// A stone placed by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
}

/// One entry of the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Place(Move),
    /// Turn committed after a single stone
    Pass,
}

impl Step {
    #[inline]
    pub fn placement(self) -> Option<Move> {
        match self {
            Step::Place(mv) => Some(mv),
            Step::Pass => None,
        }
    }
}

/// Stones worth framing in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecentMarks {
    /// Most recent placement
    pub last: Option<Pos>,
    /// Earlier stone of the same two-stone turn
    pub paired: Option<Pos>,
}

/// Square game board with undo history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, `y * size + x`
    cells: Vec<Cell>,
    history: Vec<Step>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            history: Vec::with_capacity(size * size * 2),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.y * self.size + pos.x
    }

    #[inline]
    pub fn is_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Get cell at position. Out-of-bounds reads as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.is_in_bounds(pos.x, pos.y) {
            self.cells[self.index(pos)]
        } else {
            Cell::Empty
        }
    }

    /// Check if an in-bounds position holds no stone
    #[inline]
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.is_in_bounds(x, y) && self.cells[self.index(Pos::new(x, y))] == Cell::Empty
    }

    /// Place a stone and record it in the history
    pub fn place(&mut self, x: usize, y: usize, player: Player) -> Result<Pos, GameError> {
        if !self.is_in_bounds(x, y) {
            return Err(GameError::OutOfBounds { x, y, size: self.size });
        }
        let pos = Pos::new(x, y);
        let idx = self.index(pos);
        if self.cells[idx] != Cell::Empty {
            return Err(GameError::CellOccupied { x, y });
        }
        self.cells[idx] = player.into();
        self.history.push(Step::Place(Move { pos, player }));
        Ok(pos)
    }

    /// Append a pass sentinel; the grid is untouched
    pub fn record_pass(&mut self) {
        self.history.push(Step::Pass);
    }

    /// Pop the last history entry, clearing its stone if it was a placement
    pub fn undo_last(&mut self) -> Result<Step, GameError> {
        let step = self.history.pop().ok_or(GameError::EmptyHistory)?;
        if let Step::Place(mv) = step {
            let idx = self.index(mv.pos);
            self.cells[idx] = Cell::Empty;
        }
        Ok(step)
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.history.clear();
    }

    #[inline]
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    #[inline]
    pub fn last_step(&self) -> Option<Step> {
        self.history.last().copied()
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Iterate over placed stones with their move number (history index)
    pub fn numbered_stones(&self) -> impl Iterator<Item = (usize, Move)> + '_ {
        self.history
            .iter()
            .enumerate()
            .filter_map(|(i, step)| step.placement().map(|mv| (i, mv)))
    }

    /// Last placed stone, plus the one before it when both belong to the
    /// same turn. A trailing pass points at the stone that preceded it.
    pub fn recent_marks(&self) -> RecentMarks {
        match self.history.as_slice() {
            [.., prev, Step::Place(last)] => {
                let paired = prev
                    .placement()
                    .filter(|p| p.player == last.player)
                    .map(|p| p.pos);
                RecentMarks { last: Some(last.pos), paired }
            }
            [.., Step::Place(before), Step::Pass] => RecentMarks {
                last: Some(before.pos),
                paired: None,
            },
            [Step::Place(only)] => RecentMarks {
                last: Some(only.pos),
                paired: None,
            },
            _ => RecentMarks::default(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
