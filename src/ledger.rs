use smallvec::SmallVec;

use crate::{Direction, GridCoord, WordId, MAX_WORDS};

/// A record of one word successfully written into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the ranked word list of the construction run.
    pub word_id: WordId,
    /// Coordinate of the word's first letter.
    pub start: GridCoord,
    pub direction: Direction,
    pub length: usize,
}

impl Placement {
    pub fn row(&self) -> usize {
        self.start.0
    }

    pub fn col(&self) -> usize {
        self.start.1
    }

    /// Generate the coords for each cell of this placement.
    pub fn cell_coords(&self) -> impl Iterator<Item = GridCoord> {
        let (row, col) = self.start;
        let direction = self.direction;
        (0..self.length).map(move |cell_idx| match direction {
            Direction::Across => (row, col + cell_idx),
            Direction::Down => (row + cell_idx, col),
        })
    }

    /// Coordinate of the last letter.
    pub fn end(&self) -> GridCoord {
        let (row, col) = self.start;
        let last = self.length.saturating_sub(1);
        match self.direction {
            Direction::Across => (row, col + last),
            Direction::Down => (row + last, col),
        }
    }

    pub fn contains(&self, (row, col): GridCoord) -> bool {
        let (end_row, end_col) = self.end();
        (self.row()..=end_row).contains(&row) && (self.col()..=end_col).contains(&col)
    }

    /// The single cell shared with `other`, if the two placements cross.
    pub fn crossing(&self, other: &Placement) -> Option<GridCoord> {
        self.cell_coords().find(|&coord| other.contains(coord))
    }
}

/// Append-only record of the placements made during one construction run, in the order they were
/// made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    placements: SmallVec<[Placement; MAX_WORDS]>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    pub(crate) fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Placement> {
        self.placements.get(idx)
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    pub fn for_word(&self, word_id: WordId) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.word_id == word_id)
    }

    /// Placements starting on `row`, in placement order.
    pub fn in_row(&self, row: usize) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |placement| placement.row() == row)
    }

    /// Placements ordered by starting row for a clue listing. Placements starting on the same row
    /// keep placement order.
    pub fn in_clue_order(&self) -> Vec<&Placement> {
        let mut ordered: Vec<&Placement> = self.placements.iter().collect();
        ordered.sort_by_key(|placement| placement.row());
        ordered
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
