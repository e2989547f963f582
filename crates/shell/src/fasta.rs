//! Reading sequences from FASTA files.

use std::{io::Read, path::Path};

/// Reads a FASTA file from the given path.
///
/// # Returns
///
/// The `(id, sequence)` pairs in the order they appear in the file.
///
/// # Errors
///
/// * If the file does not exist.
/// * If the file cannot be read as a FASTA file.
/// * If any ID or sequence is empty.
pub fn read<P: AsRef<Path>>(path: &P) -> Result<Vec<(String, String)>, String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("Path {path:?} does not exist!"));
    }

    ftlog::info!("Reading FASTA file from {path:?}.");
    let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    read_from(file)
}

/// Reads FASTA records from any reader.
///
/// # Errors
///
/// * If a record cannot be parsed.
/// * If any ID or sequence is empty.
pub fn read_from<R: Read>(reader: R) -> Result<Vec<(String, String)>, String> {
    let mut seqs = Vec::new();

    for record in bio::io::fasta::Reader::new(reader).records() {
        let record = record.map_err(|e| format!("Bad record {}: {e}", seqs.len()))?;

        let name = record.id().to_string();
        if name.is_empty() {
            return Err(format!("Empty ID for record {}.", seqs.len()));
        }

        let seq = String::from_utf8_lossy(record.seq()).into_owned();
        if seq.is_empty() {
            return Err(format!("Empty sequence for record {}.", seqs.len()));
        }

        seqs.push((name, seq));
    }

    ftlog::info!("Read {} sequences.", seqs.len());
    Ok(seqs)
}

/// The sequences of the first two records.
///
/// # Errors
///
/// If there are fewer than two records.
pub fn first_two(records: Vec<(String, String)>) -> Result<[String; 2], String> {
    let num_records = records.len();
    let mut seqs = records.into_iter().map(|(_, seq)| seq);
    match (seqs.next(), seqs.next()) {
        (Some(x), Some(y)) => Ok([x, y]),
        _ => Err(format!("Need at least two sequences, found {num_records}.")),
    }
}
