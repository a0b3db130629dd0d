//! Puzzle input loading

use crate::error::CliError;
use std::io::Read;
use std::path::Path;

/// Read the puzzle input from a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Input {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_input_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2413\n3215").unwrap();
        let input = read_input(Some(file.path())).unwrap();
        assert_eq!(input, "2413\n3215");
    }

    #[test]
    fn missing_files_name_the_path() {
        let err = read_input(Some(Path::new("/no/such/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/input.txt"));
    }
}
