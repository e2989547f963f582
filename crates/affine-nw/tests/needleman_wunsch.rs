//! Tests for the alignment matrix and traceback in `affine-nw`.

use affine_nw::{AlignmentMatrix, Direction, ScoreModel, GAP};
use float_cmp::approx_eq;
use rand::prelude::*;
use test_case::test_case;

fn random_sequences(seed: u64, max_len: usize, alphabet: &[u8]) -> [Vec<u8>; 2] {
    let mut rng = StdRng::seed_from_u64(seed);
    let sequence = |rng: &mut StdRng| {
        let len = rng.gen_range(1..=max_len);
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect::<Vec<_>>()
    };
    let x = sequence(&mut rng);
    let y = sequence(&mut rng);
    [x, y]
}

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&c| c != GAP).collect()
}

/// Checks that a computed cell holds the best of its candidates, and that its
/// predecessor is the first candidate with that score.
fn check_cell(matrix: &AlignmentMatrix<f64>, i: usize, j: usize) -> Result<(), String> {
    let cell = matrix.peek(i, j).ok_or(format!("Cell ({i}, {j}) was not computed"))?;
    let score = |a: usize, b: usize| {
        matrix
            .peek(a, b)
            .map(|c| c.score)
            .ok_or(format!("Cell ({a}, {b}) was not computed"))
    };
    let model = matrix.model();

    if (i, j) == (0, 0) {
        assert_eq!(cell.score, matrix.identity_score(0, 0));
        assert!(cell.is_start());
        return Ok(());
    }

    let mut candidates = Vec::new();
    if i > 0 && j > 0 {
        candidates.push((score(i - 1, j - 1)? + matrix.identity_score(i, j), (i - 1, j - 1)));
    }
    for n in 0..i {
        candidates.push((score(n, j)? - model.gap_cost(i - n), (n, j)));
    }
    for m in 0..j {
        candidates.push((score(i, m)? - model.gap_cost(j - m), (i, m)));
    }

    assert!(candidates.iter().all(|&(s, _)| cell.score >= s), "Cell ({i}, {j}) is not the best");

    let first_best = candidates
        .iter()
        .find(|&&(s, _)| s == cell.score)
        .ok_or(format!("Cell ({i}, {j}) matches no candidate"))?;
    assert_eq!(cell.predecessor, Some(first_best.1));

    Ok(())
}

#[test]
fn reference_scenario() {
    let model = ScoreModel::new(5.0, -4.0, 10.0, 0.5);
    let mut matrix = AlignmentMatrix::new(&"TACAGTATA", &"TATATA", model).unwrap();

    assert_eq!(matrix.get(3, 1).map(|c| c.score), Some(-0.5));
    assert_eq!(matrix.get(4, 1).map(|c| c.score), Some(-1.0));
    assert_eq!(matrix.get(7, 3).map(|c| c.score), Some(-0.5));
    assert_eq!(matrix.get(8, 5).map(|c| c.score), Some(19.0));

    let [x, y] = matrix.alignment_str();
    assert_eq!(x, "TACAGTATA");
    assert_eq!(y, "TA---TATA");
}

#[test]
fn reference_scenario_f32() {
    let model = ScoreModel::<f32>::default();
    let mut matrix = AlignmentMatrix::new(&"TACAGTATA", &"TATATA", model).unwrap();

    assert!(approx_eq!(f32, matrix.score(), 19.0, ulps = 2));
    assert_eq!(matrix.alignment_str(), ["TACAGTATA".to_string(), "TA---TATA".to_string()]);
}

#[test_case("ACGT", "ACGT", 20.0, "ACGT", "ACGT"; "identical")]
#[test_case("ACGT", "AGGT", 11.0, "ACGT", "AGGT"; "one substitution")]
#[test_case("A", "AAAA", -6.0, "A---", "AAAA"; "gap in first")]
#[test_case("AAAA", "A", -6.0, "AAAA", "A---"; "gap in second")]
#[test_case("TACAGTATA", "TATATA", 19.0, "TACAGTATA", "TA---TATA"; "reference")]
fn global_alignment(x: &str, y: &str, score: f64, x_aligned: &str, y_aligned: &str) -> Result<(), String> {
    let mut matrix = AlignmentMatrix::new(&x, &y, ScoreModel::<f64>::default())?;

    assert_eq!(matrix.score(), score);
    let [x_actual, y_actual] = matrix.alignment_str();
    assert_eq!(x_actual, x_aligned);
    assert_eq!(y_actual, y_aligned);

    Ok(())
}

#[test]
fn ties_prefer_earliest_candidate() -> Result<(), String> {
    let model = ScoreModel::new(0.0, 0.0, 0.0, 0.0);
    let mut matrix = AlignmentMatrix::new(&"AAA", &"AC", model)?;
    matrix.fill();

    // Every candidate scores zero, so the diagonal wins where it exists and
    // the gap from the lowest index wins elsewhere.
    assert_eq!(matrix.peek(2, 0).and_then(|c| c.predecessor), Some((0, 0)));
    assert_eq!(matrix.peek(0, 1).and_then(|c| c.predecessor), Some((0, 0)));
    assert_eq!(matrix.peek(2, 1).and_then(|c| c.predecessor), Some((1, 0)));
    assert_eq!(matrix.peek(1, 1).and_then(|c| c.predecessor), Some((0, 0)));

    let path = matrix.path_from(2, 1);
    assert_eq!(
        path,
        vec![
            ((0, 0), Direction::Start),
            ((1, 0), Direction::Horizontal(1)),
            ((2, 1), Direction::Diagonal)
        ]
    );
    assert_eq!(matrix.alignment_str(), ["AAA".to_string(), "A-C".to_string()]);

    Ok(())
}

#[test]
fn lazy_rectangles() -> Result<(), String> {
    let mut matrix = AlignmentMatrix::new(&"TACAGTATA", &"TATATA", ScoreModel::<f64>::default())?;
    assert_eq!(matrix.num_computed(), 1);

    matrix.get(3, 2);
    assert_eq!(matrix.num_computed(), 12);
    assert!(matrix.peek(3, 2).is_some());
    assert!(matrix.peek(4, 0).is_none());
    assert!(matrix.peek(0, 3).is_none());

    // Overlapping rectangles share their cells.
    matrix.get(1, 4);
    assert_eq!(matrix.num_computed(), 12 + 2 * 2);

    // Out of bounds queries compute nothing.
    assert!(matrix.get(9, 0).is_none());
    assert!(matrix.get(0, 6).is_none());
    assert_eq!(matrix.num_computed(), 16);

    matrix.fill();
    assert_eq!(matrix.num_computed(), 9 * 6);

    Ok(())
}

#[test]
fn queries_are_deterministic() -> Result<(), String> {
    let [x, y] = random_sequences(42, 30, b"ACGT");
    let mut matrix = AlignmentMatrix::new(&x, &y, ScoreModel::<f64>::default())?;

    let (i, j) = (x.len() / 2, y.len() / 2);
    let first = matrix.get(i, j);
    matrix.fill();
    assert_eq!(matrix.get(i, j), first);

    let alignment = matrix.alignment();
    assert_eq!(matrix.alignment(), alignment);

    let mut fresh = AlignmentMatrix::new(&x, &y, ScoreModel::<f64>::default())?;
    assert_eq!(fresh.alignment(), alignment);

    Ok(())
}

#[test_case(0, b"ACGT"; "dna-0")]
#[test_case(1, b"ACGT"; "dna-1")]
#[test_case(2, b"AC"; "binary")]
#[test_case(3, b"ACDEFGHIKLMNPQRSTVWY"; "protein")]
fn best_of_candidates(seed: u64, alphabet: &[u8]) -> Result<(), String> {
    let [x, y] = random_sequences(seed, 25, alphabet);
    let mut matrix = AlignmentMatrix::new(&x, &y, ScoreModel::new(2.0, -1.0, 3.0, 1.0))?;
    matrix.fill();

    for i in 0..x.len() {
        for j in 0..y.len() {
            check_cell(&matrix, i, j)?;
        }
    }

    Ok(())
}

#[test_case(10, ScoreModel::default(); "reference")]
#[test_case(11, ScoreModel::new(1.0, -1.0, 1.0, 1.0); "linear")]
#[test_case(12, ScoreModel::new(1.0, -3.0, 5.0, 2.0); "affine")]
#[test_case(13, ScoreModel::new(1.0, 1.0, 0.0, 0.0); "free gaps")]
fn aligned_prefixes(seed: u64, model: ScoreModel<f64>) -> Result<(), String> {
    let [x, y] = random_sequences(seed, 20, b"ACGT");
    let mut matrix = AlignmentMatrix::new(&x, &y, model)?;

    for i in 0..x.len() {
        for j in 0..y.len() {
            let [x_aligned, y_aligned] = matrix.alignment_from(i, j);
            assert_eq!(x_aligned.len(), y_aligned.len());
            assert_eq!(strip_gaps(&x_aligned), x[..=i]);
            assert_eq!(strip_gaps(&y_aligned), y[..=j]);

            // No column aligns two gaps.
            assert!(x_aligned.iter().zip(&y_aligned).all(|(&a, &b)| a != GAP || b != GAP));
        }
    }

    Ok(())
}

#[test]
fn long_sequences_do_not_recurse() -> Result<(), String> {
    let x = "ACGT".repeat(150);
    let y = "AGCT".repeat(100);
    let mut matrix = AlignmentMatrix::new(&x, &y, ScoreModel::<f64>::default())?;

    let [x_aligned, y_aligned] = matrix.alignment();
    assert_eq!(x_aligned.len(), y_aligned.len());
    assert_eq!(strip_gaps(&x_aligned), x.as_bytes());
    assert_eq!(strip_gaps(&y_aligned), y.as_bytes());
    assert_eq!(matrix.num_computed(), x.len() * y.len());

    Ok(())
}
