//! Reconstructing aligned sequences from the matrix.

use distances::number::Float;

use super::{AlignmentMatrix, Direction, Key};

/// The gap character inserted into aligned sequences.
pub const GAP: u8 = b'-';

impl<T: Float> AlignmentMatrix<T> {
    /// The chain of moves that reaches cell `(i, j)`, from the origin to
    /// `(i, j)`.
    ///
    /// Returns an empty path if the cell is outside the matrix.
    pub fn path_from(&mut self, i: usize, j: usize) -> Vec<(Key, Direction)> {
        if self.get(i, j).is_none() {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(i + j + 1);
        let mut current = Some((i, j));
        while let Some(key) = current {
            let cell = self
                .peek(key.0, key.1)
                .unwrap_or_else(|| unreachable!("Predecessors of computed cells are computed"));
            path.push((key, Direction::between(key, cell.predecessor)));
            current = cell.predecessor;
        }

        path.reverse();
        path
    }

    /// Align the prefixes `seq1[..=i]` and `seq2[..=j]` by following
    /// predecessors back from cell `(i, j)`.
    ///
    /// Both aligned sequences have the same length, and removing the gaps from
    /// them gives back the two prefixes. Returns two empty sequences if the
    /// cell is outside the matrix.
    pub fn alignment_from(&mut self, i: usize, j: usize) -> [Vec<u8>; 2] {
        let path = self.path_from(i, j);
        let (x, y) = (self.seq1(), self.seq2());

        let [mut x_aligned, mut y_aligned] = [
            Vec::with_capacity(x.len() + y.len()),
            Vec::with_capacity(x.len() + y.len()),
        ];

        for ((i, j), direction) in path {
            match direction {
                Direction::Start | Direction::Diagonal => {
                    x_aligned.push(x[i]);
                    y_aligned.push(y[j]);
                }
                Direction::Horizontal(len) => {
                    x_aligned.extend_from_slice(&x[(i + 1 - len)..=i]);
                    y_aligned.extend(core::iter::repeat(GAP).take(len));
                }
                Direction::Vertical(len) => {
                    x_aligned.extend(core::iter::repeat(GAP).take(len));
                    y_aligned.extend_from_slice(&y[(j + 1 - len)..=j]);
                }
            }
        }

        [x_aligned, y_aligned]
    }

    /// Align the two full sequences.
    pub fn alignment(&mut self) -> [Vec<u8>; 2] {
        let (i, j) = self.last_key();
        self.alignment_from(i, j)
    }

    /// Same as `alignment_from`, but returns strings.
    pub fn alignment_str_from(&mut self, i: usize, j: usize) -> [String; 2] {
        let [x_aligned, y_aligned] = self.alignment_from(i, j);
        [
            String::from_utf8_lossy(&x_aligned).into_owned(),
            String::from_utf8_lossy(&y_aligned).into_owned(),
        ]
    }

    /// Same as `alignment`, but returns strings.
    pub fn alignment_str(&mut self) -> [String; 2] {
        let (i, j) = self.last_key();
        self.alignment_str_from(i, j)
    }
}
