//! Utility functions for loading data and filling sets

use std::{fs, io, path::Path};

use crate::SimpleSet;

/// Reads a text file into one string per line.
///
/// Line terminators (`\n` or `\r\n`) are stripped; an empty line yields an
/// empty string, except for the final terminator which does not open a new line.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be read or is not valid UTF-8.
pub fn file_to_array(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Adds every value of `data` to `set` in order, returning how many were new
pub fn build_from<T: AsRef<str>>(set: &mut dyn SimpleSet, data: &[T]) -> usize {
    data.iter().filter(|value| set.add(value.as_ref())).count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{ChainedHashSet, ProbingHashSet};

    #[test]
    fn test_file_to_array() {
        let path = std::env::temp_dir().join(format!("simple_sets_{}.txt", std::process::id()));
        fs::write(&path, "alpha\r\nbeta\n\ngamma\n").unwrap();

        let lines = file_to_array(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["alpha", "beta", "", "gamma"]);
    }

    #[test]
    fn test_file_to_array_missing_file() {
        let error = file_to_array("/definitely/not/here.txt").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_build_from_counts_new_values() {
        let data = ["a", "b", "a", "c"];

        let mut probing = ProbingHashSet::new();
        assert_eq!(build_from(&mut probing, &data), 3);

        let mut chained = ChainedHashSet::new();
        assert_eq!(build_from(&mut chained, &data), 3);
        assert_eq!(build_from(&mut chained, &data), 0);
        assert_eq!(chained.size(), 3);
    }
}
