//! Cells of the alignment matrix and the moves between them.

/// The position of a cell in the matrix: an index into the first sequence and
/// an index into the second sequence.
pub type Key = (usize, usize);

/// A computed cell of the alignment matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell<T> {
    /// The best score of any alignment of the two prefixes ending at this cell.
    pub score: T,
    /// The cell this one was reached from, or `None` for the origin, where
    /// every alignment starts.
    pub predecessor: Option<Key>,
}

impl<T> Cell<T> {
    /// Whether this cell starts an alignment.
    #[must_use]
    pub const fn is_start(&self) -> bool {
        self.predecessor.is_none()
    }
}

/// The move from a predecessor to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The origin. It aligns the first symbols of both sequences.
    Start,
    /// Align one symbol of each sequence, a match or a substitution.
    Diagonal,
    /// A gap of the given length in the second sequence.
    Horizontal(usize),
    /// A gap of the given length in the first sequence.
    Vertical(usize),
}

impl Direction {
    /// The move that leads from `predecessor` to `key`.
    ///
    /// # Panics
    ///
    /// If `predecessor` does not lie strictly before `key` along one row, one
    /// column or the diagonal.
    #[must_use]
    #[allow(clippy::panic)]
    pub fn between(key: Key, predecessor: Option<Key>) -> Self {
        let Some((p, q)) = predecessor else {
            return Self::Start;
        };
        let (i, j) = key;
        match (i.checked_sub(p), j.checked_sub(q)) {
            (Some(1), Some(1)) => Self::Diagonal,
            (Some(di), Some(0)) if di > 0 => Self::Horizontal(di),
            (Some(0), Some(dj)) if dj > 0 => Self::Vertical(dj),
            _ => panic!("No single move leads from ({p}, {q}) to ({i}, {j})"),
        }
    }
}
