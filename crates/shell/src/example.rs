//! The built-in self-check, run when no input is given.

use affine_nw::{AlignmentMatrix, Cell, ScoreModel};

/// The first sequence of the worked example.
pub const SEQ1: &str = "TACAGTATA";

/// The second sequence of the worked example.
pub const SEQ2: &str = "TATATA";

/// Cells whose scores are known for the worked example.
const EXPECTED_SCORES: [((usize, usize), f64); 4] =
    [((3, 1), -0.5), ((4, 1), -1.0), ((7, 3), -0.5), ((8, 5), 19.0)];

/// The optimal alignment of the worked example.
const EXPECTED_ALIGNMENT: [&str; 2] = ["TACAGTATA", "TA---TATA"];

/// Formats a cell as `(score, predecessor)`.
fn describe(cell: Cell<f64>) -> String {
    let predecessor = cell
        .predecessor
        .map_or_else(|| "start".to_string(), |(p, q)| format!("({p}, {q})"));
    format!("({:?}, {predecessor})", cell.score)
}

/// Aligns the worked example with identity 5, substitution -4, gap opening 10
/// and gap extension 0.5, and checks the result.
///
/// # Returns
///
/// A report of some cells, the score table and the alignment.
///
/// # Errors
///
/// If any score or the alignment differs from the expected values.
#[allow(clippy::float_cmp)]
pub fn run() -> Result<String, String> {
    let model = ScoreModel::new(5.0, -4.0, 10.0, 0.5);
    let mut matrix = AlignmentMatrix::new(&SEQ1, &SEQ2, model)?;

    let mut report = Vec::new();
    for (i, j) in [(1, 1), (3, 1), (4, 1), (7, 3), (8, 5)] {
        let cell = matrix
            .get(i, j)
            .ok_or_else(|| format!("Cell ({i}, {j}) is outside the matrix"))?;
        report.push(format!("d[{i}, {j}] = {}", describe(cell)));
    }

    matrix.fill();
    report.push(matrix.to_string());

    let alignment = matrix.alignment_str();
    report.push(format!("\nAlignment sequences :\n{}\n{}", alignment[0], alignment[1]));

    for ((i, j), expected) in EXPECTED_SCORES {
        let actual = matrix.get(i, j).map(|cell| cell.score);
        if actual != Some(expected) {
            return Err(format!("Expected score {expected} at ({i}, {j}), got {actual:?}"));
        }
    }
    if alignment != EXPECTED_ALIGNMENT {
        return Err(format!("Expected alignment {EXPECTED_ALIGNMENT:?}, got {alignment:?}"));
    }
    ftlog::info!("Self-check passed.");

    report.push("\nAll checks passed.".to_string());
    Ok(report.join("\n"))
}
