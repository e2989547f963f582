//! Needleman-Wunsch global alignment with a general affine gap cost.

mod matrix;
mod ops;
mod score_model;
mod traceback;

pub use matrix::AlignmentMatrix;
pub use ops::{Cell, Direction, Key};
pub use score_model::ScoreModel;
pub use traceback::GAP;
