//! The memoized dynamic-programming matrix.

use core::fmt;

use distances::number::Float;

use super::{Cell, Key, ScoreModel};

/// The memoized matrix of optimal scores for a global alignment of two
/// sequences.
///
/// Cell `(i, j)` holds the best score of aligning `seq1[..=i]` with
/// `seq2[..=j]` and the cell it was reached from. A cell may be reached by
///
/// * a diagonal move from `(i - 1, j - 1)`, aligning `seq1[i]` with `seq2[j]`,
/// * a horizontal move from any `(n, j)` with `n < i`, opening a gap of
///   length `i - n` in the second sequence,
/// * a vertical move from any `(i, m)` with `m < j`, opening a gap of length
///   `j - m` in the first sequence.
///
/// Every gap length is priced by [`ScoreModel::gap_cost`] on its own instead
/// of by the usual three-matrix recurrence, so a cell costs `O(i + j)` to
/// compute and the whole matrix `O(n * m * (n + m))`.
///
/// Cells are computed on demand. The cells that `(i, j)` depends on are
/// exactly those in the rectangle `[0..=i] x [0..=j]`, so a query fills that
/// rectangle row by row and the cache is always a union of such rectangles.
pub struct AlignmentMatrix<T: Float> {
    /// The first sequence, indexed by `i`.
    seq1: Vec<u8>,
    /// The second sequence, indexed by `j`.
    seq2: Vec<u8>,
    /// The scoring scheme.
    model: ScoreModel<T>,
    /// The computed cells. `rows[i][j]` is cell `(i, j)`, and row lengths never
    /// increase with `i`.
    rows: Vec<Vec<Cell<T>>>,
}

impl<T: Float> AlignmentMatrix<T> {
    /// Create a new matrix for aligning `seq1` with `seq2`.
    ///
    /// Only the origin is computed here.
    ///
    /// # Errors
    ///
    /// If either sequence is empty.
    pub fn new<S: AsRef<[u8]>>(seq1: &S, seq2: &S, model: ScoreModel<T>) -> Result<Self, String> {
        let (seq1, seq2) = (seq1.as_ref(), seq2.as_ref());
        if seq1.is_empty() {
            return Err("The first sequence is empty.".to_string());
        }
        if seq2.is_empty() {
            return Err("The second sequence is empty.".to_string());
        }

        let origin = Cell {
            score: model.identity_score(seq1[0], seq2[0]),
            predecessor: None,
        };

        Ok(Self {
            seq1: seq1.to_vec(),
            seq2: seq2.to_vec(),
            model,
            rows: vec![vec![origin]],
        })
    }

    /// The first sequence.
    #[must_use]
    pub fn seq1(&self) -> &[u8] {
        &self.seq1
    }

    /// The second sequence.
    #[must_use]
    pub fn seq2(&self) -> &[u8] {
        &self.seq2
    }

    /// The scoring scheme.
    pub const fn model(&self) -> &ScoreModel<T> {
        &self.model
    }

    /// The number of rows and columns, i.e. the lengths of the two sequences.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.seq1.len(), self.seq2.len())
    }

    /// The key of the last cell, where a full global alignment ends.
    #[must_use]
    pub fn last_key(&self) -> Key {
        (self.seq1.len() - 1, self.seq2.len() - 1)
    }

    /// Whether `(i, j)` lies inside the matrix.
    #[must_use]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.seq1.len() && j < self.seq2.len()
    }

    /// The score for aligning `seq1[i]` with `seq2[j]`.
    ///
    /// # Panics
    ///
    /// If `(i, j)` is outside the matrix.
    #[allow(clippy::panic)]
    pub fn identity_score(&self, i: usize, j: usize) -> T {
        if !self.contains(i, j) {
            panic!("Cell ({i}, {j}) is outside a matrix of shape {:?}", self.shape());
        }
        self.model.identity_score(self.seq1[i], self.seq2[j])
    }

    /// The number of cells computed so far.
    #[must_use]
    pub fn num_computed(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Look up a cell without computing anything.
    ///
    /// Returns `None` if the cell is outside the matrix or not yet computed.
    #[must_use]
    pub fn peek(&self, i: usize, j: usize) -> Option<Cell<T>> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Get the score and predecessor of cell `(i, j)`, computing it and every
    /// cell it depends on if needed.
    ///
    /// Returns `None`, and computes nothing, if the cell is outside the matrix.
    pub fn get(&mut self, i: usize, j: usize) -> Option<Cell<T>> {
        if !self.contains(i, j) {
            return None;
        }

        if let Some(cell) = self.peek(i, j) {
            return Some(cell);
        }

        if self.rows.len() <= i {
            self.rows.resize_with(i + 1, Vec::new);
        }
        let mut num_new = 0_usize;
        for a in 0..=i {
            for b in self.rows[a].len()..=j {
                let cell = self.compute(a, b);
                self.rows[a].push(cell);
                num_new += 1;
            }
        }
        ftlog::trace!("Computed {num_new} cells to reach ({i}, {j}).");

        self.peek(i, j)
    }

    /// The optimal score of a global alignment of the two full sequences.
    pub fn score(&mut self) -> T {
        let (i, j) = self.last_key();
        self.get(i, j)
            .map(|cell| cell.score)
            .unwrap_or_else(|| unreachable!("The last cell is inside the matrix"))
    }

    /// Compute every cell of the matrix.
    pub fn fill(&mut self) {
        let (n, m) = self.shape();
        ftlog::debug!("Filling a {n} x {m} alignment matrix.");
        self.score();
    }

    /// Compute cell `(a, b)` from already computed cells.
    ///
    /// Candidates are visited in the order diagonal, horizontal from `n = 0`
    /// upward, vertical from `m = 0` upward, and a later candidate only wins
    /// with a strictly greater score.
    fn compute(&self, a: usize, b: usize) -> Cell<T> {
        if a == 0 && b == 0 {
            return self.rows[0][0];
        }

        let diagonal = (a > 0 && b > 0).then(|| {
            let score = self.rows[a - 1][b - 1].score + self.identity_score(a, b);
            (score, (a - 1, b - 1))
        });
        let horizontal = (0..a).map(|n| (self.rows[n][b].score - self.model.gap_cost(a - n), (n, b)));
        let vertical = (0..b).map(|m| (self.rows[a][m].score - self.model.gap_cost(b - m), (a, m)));

        let (score, predecessor) = diagonal
            .into_iter()
            .chain(horizontal)
            .chain(vertical)
            .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best })
            .unwrap_or_else(|| unreachable!("Only the origin has no predecessor"));

        Cell {
            score,
            predecessor: Some(predecessor),
        }
    }
}

/// The score table, one line per symbol of the second sequence and one column
/// per symbol of the first. Scores use the `Debug` format, so whole floats
/// keep their `.0`. Cells not yet computed are shown as `.`.
impl<T: Float> fmt::Display for AlignmentMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.seq1.iter().map(|&c| char::from(c).to_string()).collect::<Vec<_>>();
        write!(f, " |{}", header.join("\t|"))?;

        for (j, &c) in self.seq2.iter().enumerate() {
            let scores = (0..self.seq1.len())
                .map(|i| {
                    self.peek(i, j)
                        .map_or_else(|| ".".to_string(), |cell| format!("{:?}", cell.score))
                })
                .collect::<Vec<_>>();
            write!(f, "\n{}|{}", char::from(c), scores.join("\t|"))?;
        }

        Ok(())
    }
}
