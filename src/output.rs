use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::logit::ProbabilityTable;

/// Where the driver writes results when no other path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Overwrites `path` with one line per alternative, in ascending key order:
/// `Alternative:<k>: <array>`.
///
/// The array text is ndarray's `Display` rendering. The file handle closes
/// on every exit path.
pub fn save_probabilities(
    probabilities: &ProbabilityTable,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for (alt, probs) in probabilities {
        writeln!(out, "Alternative:{alt}: {probs}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::save_probabilities;
    use crate::logit::ProbabilityTable;
    use crate::math::logistic::logistic;
    use std::fs;

    fn sample_table() -> ProbabilityTable {
        let mut table = ProbabilityTable::new();
        table.insert(3, logistic(0.25));
        table.insert(1, logistic(vec![0.0, 1.0]));
        table.insert(2, logistic(-1.37));
        table
    }

    #[test]
    fn writes_one_line_per_alternative_in_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        save_probabilities(&sample_table(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Alternative:1: "));
        assert!(lines[1].starts_with("Alternative:2: "));
        assert!(lines[2].starts_with("Alternative:3: "));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn rewriting_overwrites_and_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let table = sample_table();

        save_probabilities(&table, &path).unwrap();
        let first = fs::read(&path).unwrap();

        save_probabilities(&table, &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_table_truncates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "stale contents\n").unwrap();

        save_probabilities(&ProbabilityTable::new(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
