use crate::error::{Result, SpellError};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// A named byte stream to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin { name: String },
}

impl Input {
    /// Files in the order given, or all of stdin when there are none.
    pub fn from_args(paths: &[PathBuf], stdin_name: &str) -> Vec<Input> {
        if paths.is_empty() {
            vec![Input::Stdin {
                name: stdin_name.to_string(),
            }]
        } else {
            paths.iter().cloned().map(Input::File).collect()
        }
    }

    /// Name used in findings and error messages.
    pub fn name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Stdin { name } => name.clone(),
        }
    }

    /// Stdin is drained into memory up front and scanned from there.
    pub fn open(&self) -> Result<Box<dyn Read + Send>> {
        match self {
            Input::File(path) => {
                let file = File::open(path).map_err(|source| SpellError::InputUnreadable {
                    name: self.name(),
                    source,
                })?;
                Ok(Box::new(file))
            }
            Input::Stdin { name } => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(|source| SpellError::InputUnreadable {
                        name: name.clone(),
                        source,
                    })?;
                Ok(Box::new(Cursor::new(buf)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_paths_means_stdin() {
        let inputs = Input::from_args(&[], "stdin");
        assert_eq!(
            inputs,
            vec![Input::Stdin {
                name: "stdin".to_string()
            }]
        );
        assert_eq!(inputs[0].name(), "stdin");
    }

    #[test]
    fn test_paths_keep_order_and_spelling() {
        let paths = vec![PathBuf::from("b.txt"), PathBuf::from("./a.txt")];
        let names: Vec<String> = Input::from_args(&paths, "stdin")
            .iter()
            .map(Input::name)
            .collect();
        assert_eq!(names, vec!["b.txt", "./a.txt"]);
    }

    #[test]
    fn test_open_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "some text").unwrap();

        let mut contents = String::new();
        Input::File(path)
            .open()
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "some text");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let err = Input::File(dir.path().join("missing.txt")).open().err().unwrap();
        assert!(matches!(err, SpellError::InputUnreadable { .. }));
    }
}
