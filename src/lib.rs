//! Build a small crossword from a list of words by crossing each word through a letter it shares
//! with the words already on the board.
//!
//! The longest word goes across the middle row; every later word is placed by a first-fit,
//! row-major scan for a legal crossing, or skipped if there is none. There is no backtracking, so
//! the result depends on word order.

pub mod config;
pub mod errors;
pub mod grid;
pub mod ledger;
pub mod logging;
pub mod ranking;
pub mod word;

use bit_set::BitSet;
use instant::{Duration, Instant};

pub use crate::config::BuilderConfig;
pub use crate::errors::CrosswordError;
pub use crate::grid::{Cell, Grid};
pub use crate::ledger::{Ledger, Placement};
pub use crate::word::Word;

use crate::errors::{GridError, ValidationError};
use crate::grid::{Offset, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};
use crate::ranking::rank_words;
use crate::word::parse_words;

/// The default board is `GRID_SIZE` x `GRID_SIZE`.
pub const GRID_SIZE: usize = 15;

/// The default maximum number of words in one construction run.
pub const MAX_WORDS: usize = 20;

/// The shortest word accepted.
pub const MIN_WORD_LENGTH: usize = 2;

/// The longest word accepted on the default board.
pub const MAX_WORD_LENGTH: usize = GRID_SIZE;

/// An identifier for a word, based on its index in the ranked word list of a construction run.
pub type WordId = usize;

/// Zero-indexed (row, col) coords for a cell in the grid, where row = 0 is the top row.
pub type GridCoord = (usize, usize);

/// Direction a placed word reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// The offset from one letter of a word to the next.
    pub fn step(self) -> Offset {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    fn of_offset((dr, _): Offset) -> Direction {
        if dr == 0 {
            Direction::Across
        } else {
            Direction::Down
        }
    }
}

/// Why a candidate crossing was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The cell is already the crossing point of two words.
    AlreadyCrossed,
    /// The cell has no filled orthogonal neighbor, so there is no run to cross.
    Isolated,
    /// A corner neighbor of the crossing cell is filled.
    DiagonalNeighbor,
    /// The word would run off the board.
    OutOfBounds,
    /// A cell the word needs is taken, or a neighbor beside it is filled.
    Collision,
    /// The cell just before the first letter or just after the last letter is filled.
    TouchesEnd,
}

/// What happened to one word during a construction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(Placement),
    Skipped,
}

/// A struct tracking statistics about the construction process.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub words: usize,
    pub placed: usize,
    pub skipped: usize,
    /// Number of (cell, letter) pairings whose fit was checked.
    pub candidates_checked: u64,
    pub rejections: u64,
    pub duration: Duration,
}

/// The result of a construction run: the finished board, the placements that produced it, and
/// which words could not be placed.
#[derive(Debug, Clone)]
pub struct Construction {
    /// The ranked word list; `WordId`s index into this.
    pub words: Vec<Word>,
    pub grid: Grid,
    pub ledger: Ledger,
    pub placed: BitSet,
    pub skipped: Vec<WordId>,
    pub statistics: Statistics,
}

impl Construction {
    pub fn word(&self, word_id: WordId) -> Option<&Word> {
        self.words.get(word_id)
    }

    pub fn is_placed(&self, word_id: WordId) -> bool {
        self.placed.contains(word_id)
    }

    pub fn skipped_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.skipped.iter().map(move |&word_id| &self.words[word_id])
    }

    /// Each placement with its word, in placement order.
    pub fn placed_words(&self) -> impl Iterator<Item = (&Placement, &Word)> + '_ {
        self.ledger.iter().map(move |placement| (placement, &self.words[placement.word_id]))
    }
}

/// Builds crosswords with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct CrosswordBuilder {
    config: BuilderConfig,
}

impl CrosswordBuilder {
    pub fn new(config: BuilderConfig) -> CrosswordBuilder {
        CrosswordBuilder { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Validate and rank `tokens`, then construct a crossword from them.
    pub fn build<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Construction, CrosswordError> {
        self.config.validate()?;
        let words = parse_words(tokens, &self.config)?;

        self.build_ranked(rank_words(words))
    }

    /// Construct a crossword from words that are already ranked. The words are re-checked against
    /// the config, since `Word`'s fields are public.
    pub fn build_ranked(&self, words: Vec<Word>) -> Result<Construction, CrosswordError> {
        self.config.validate()?;
        self.check_words(&words)?;

        let start = Instant::now();
        log::info!("Constructing a {0}x{0} crossword from {1} words", self.config.grid_size, words.len());

        let mut grid = Grid::new(self.config.grid_size);
        let mut ledger = Ledger::new();
        let mut placed = BitSet::with_capacity(words.len());
        let mut skipped: Vec<WordId> = vec![];
        let mut statistics = Statistics { words: words.len(), ..Statistics::default() };

        for (word_id, word) in words.iter().enumerate() {
            let outcome = if word_id == 0 {
                place_centered(&mut grid, word_id, word)?
            } else {
                place_crossing(&mut grid, word_id, word, &mut statistics)?
            };

            match outcome {
                PlacementOutcome::Placed(placement) => {
                    log::debug!(
                        "Placed {} {:?} at {:?}",
                        word.as_str(),
                        placement.direction,
                        placement.start
                    );
                    placed.insert(word_id);
                    ledger.push(placement);
                }
                PlacementOutcome::Skipped => {
                    log::warn!("Could not place word: {}", word.as_str());
                    skipped.push(word_id);
                }
            }
        }

        statistics.placed = ledger.len();
        statistics.skipped = skipped.len();
        statistics.duration = start.elapsed();
        log::info!(
            "Placed {} of {} words ({} skipped) in {:?}",
            statistics.placed,
            statistics.words,
            statistics.skipped,
            statistics.duration
        );

        Ok(Construction { words, grid, ledger, placed, skipped, statistics })
    }

    fn check_words(&self, words: &[Word]) -> Result<(), ValidationError> {
        if words.len() > self.config.max_words {
            return Err(ValidationError::TooManyWords { count: words.len(), max: self.config.max_words });
        }

        for word in words {
            if word.is_empty() {
                return Err(ValidationError::Empty { input_index: word.input_index });
            }
            if let Some(&invalid_char) = word.letters.iter().find(|c| !c.is_ascii_uppercase()) {
                return Err(ValidationError::NotAlphabetic { word: word.text.clone(), invalid_char });
            }
            // Placement writes `letters` but reporting reads `text`.
            if !word.text.chars().eq(word.letters.iter().copied()) {
                return Err(ValidationError::LettersMismatch {
                    word: word.text.clone(),
                    letters: word.letters.iter().collect(),
                });
            }
            if word.len() < self.config.min_word_length {
                return Err(ValidationError::TooShort {
                    word: word.text.clone(),
                    length: word.len(),
                    min: self.config.min_word_length,
                });
            }
            if word.len() > self.config.max_word_length {
                return Err(ValidationError::TooLong {
                    word: word.text.clone(),
                    length: word.len(),
                    max: self.config.max_word_length,
                });
            }
        }

        Ok(())
    }
}

/// Construct a crossword on the default 15x15 board.
pub fn build_crossword<S: AsRef<str>>(tokens: &[S]) -> Result<Construction, CrosswordError> {
    CrosswordBuilder::default().build(tokens)
}

/// Lay the first word across the middle row. When the leftover space is odd, the extra cell goes
/// on the right.
fn place_centered(grid: &mut Grid, word_id: WordId, word: &Word) -> Result<PlacementOutcome, GridError> {
    let size = grid.size();
    let row = size / 2;
    let left_offset = size.saturating_sub(word.len()) / 2;

    let placement = Placement {
        word_id,
        start: (row, left_offset),
        direction: Direction::Across,
        length: word.len(),
    };
    write_placement(grid, &placement, word)?;

    Ok(PlacementOutcome::Placed(placement))
}

/// Try every filled cell in row-major order, and within each cell every matching letter of the
/// word from left to right. The first crossing that passes `check_fit` is written.
fn place_crossing(
    grid: &mut Grid,
    word_id: WordId,
    word: &Word,
    statistics: &mut Statistics,
) -> Result<PlacementOutcome, GridError> {
    let mut found: Option<Placement> = None;

    'cells: for (coord, grid_letter) in grid.filled_cells() {
        for (letter_idx, &letter) in word.letters.iter().enumerate() {
            if letter != grid_letter {
                continue;
            }

            statistics.candidates_checked += 1;
            match check_fit(grid, word_id, word.len(), coord, letter_idx) {
                Ok(placement) => {
                    found = Some(placement);
                    break 'cells;
                }
                Err(rejection) => {
                    statistics.rejections += 1;
                    log::trace!("{} through {coord:?} at letter {letter_idx}: {rejection:?}", word.as_str());
                }
            }
        }
    }

    match found {
        Some(placement) => {
            write_placement(grid, &placement, word)?;
            Ok(PlacementOutcome::Placed(placement))
        }
        None => Ok(PlacementOutcome::Skipped),
    }
}

/// Which way the filled run through `coord` goes. A cell with filled neighbors on both axes is
/// already a crossing and cannot host another.
fn existing_direction(grid: &Grid, coord: GridCoord) -> Result<Direction, Rejection> {
    let mut across = false;
    let mut down = false;

    for &offset in &ORTHOGONAL_OFFSETS {
        if !grid.is_vacant_at_offset(coord, offset) {
            match Direction::of_offset(offset) {
                Direction::Across => across = true,
                Direction::Down => down = true,
            }
        }
    }

    match (across, down) {
        (true, true) => Err(Rejection::AlreadyCrossed),
        (true, false) => Ok(Direction::Across),
        (false, true) => Ok(Direction::Down),
        (false, false) => Err(Rejection::Isolated),
    }
}

/// Check whether a word of `length` letters can cross the filled cell at `coord`, with its letter
/// `letter_idx` landing on that cell. The caller has already matched the letters. On success the
/// returned placement runs perpendicular to the word already through `coord`.
fn check_fit(
    grid: &Grid,
    word_id: WordId,
    length: usize,
    coord: GridCoord,
    letter_idx: usize,
) -> Result<Placement, Rejection> {
    let existing = existing_direction(grid, coord)?;

    if DIAGONAL_OFFSETS.iter().any(|&offset| !grid.is_vacant_at_offset(coord, offset)) {
        return Err(Rejection::DiagonalNeighbor);
    }

    let direction = existing.perpendicular();
    let (dr, dc) = direction.step();
    let before = letter_idx as isize;
    let after = (length - letter_idx - 1) as isize;

    let start = grid.offset(coord, (-before * dr, -before * dc)).ok_or(Rejection::OutOfBounds)?;
    grid.offset(coord, (after * dr, after * dc)).ok_or(Rejection::OutOfBounds)?;

    let placement = Placement { word_id, start, direction, length };

    // Every new cell must be empty, with nothing beside it on the other axis.
    let (sr, sc) = existing.step();
    for (cell_idx, cell) in placement.cell_coords().enumerate() {
        if cell_idx == letter_idx {
            continue;
        }
        if {
            !grid.is_empty(cell) ||
                !grid.is_vacant_at_offset(cell, (sr, sc)) ||
                !grid.is_vacant_at_offset(cell, (-sr, -sc))
        } {
            return Err(Rejection::Collision);
        }
    }

    if {
        !grid.is_vacant_at_offset(placement.start, (-dr, -dc)) ||
            !grid.is_vacant_at_offset(placement.end(), (dr, dc))
    } {
        return Err(Rejection::TouchesEnd);
    }

    Ok(placement)
}

fn write_placement(grid: &mut Grid, placement: &Placement, word: &Word) -> Result<(), GridError> {
    for (coord, &letter) in placement.cell_coords().zip(&word.letters) {
        grid.set(coord, letter)?;
    }

    Ok(())
}
