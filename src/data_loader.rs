//! Data loader for discovering and parsing reading logs
//!
//! Every regular, non-hidden file directly inside the input directory is one
//! book. Files are parsed in file-name order so the chart legend is stable
//! between runs. When any file fails, every failure is collected and
//! returned together instead of stopping at the first one.
//!
//! # Examples
//!
//! ```no_run
//! use readart::data_loader::LogLoader;
//! use readart_core::config::ParseConfig;
//!
//! # fn example() -> readart::Result<()> {
//! let loader = LogLoader::new("./input", ParseConfig::from_cli(None));
//! for book in loader.load_books()? {
//!     println!("{}: {} entries", book.name(), book.entries().len());
//! }
//! # Ok(())
//! # }
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use readart_core::config::ParseConfig;
use readart_core::error::{ReadartError, Result};
use readart_core::parser::parse_log_str;
use readart_core::types::BookLog;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Loads every reading log in a directory
pub struct LogLoader {
    input_dir: PathBuf,
    config: ParseConfig,
    show_progress: bool,
}

impl LogLoader {
    /// Create a loader for `input_dir`
    pub fn new(input_dir: impl Into<PathBuf>, config: ParseConfig) -> Self {
        Self {
            input_dir: input_dir.into(),
            config,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The directory logs are read from
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Find all log files in the input directory, sorted by file name
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the input directory does not exist and
    /// `Read` when it cannot be listed.
    pub fn find_log_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(ReadartError::InvalidArgument(format!(
                "input directory {} does not exist",
                self.input_dir.display()
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ReadartError::Read {
                path: self.input_dir.clone(),
                source: e.into(),
            })?;

            let is_hidden = entry.file_name().to_string_lossy().starts_with('.');
            if is_hidden || !entry.file_type().is_file() {
                debug!("Skipping {}", entry.path().display());
                continue;
            }
            files.push(entry.into_path());
        }

        debug!(
            "Found {} log files in {}",
            files.len(),
            self.input_dir.display()
        );
        Ok(files)
    }

    /// Read and parse one log file; the book is named after the file
    pub fn load_book(path: &Path, config: &ParseConfig) -> Result<BookLog> {
        let content = std::fs::read_to_string(path).map_err(|source| ReadartError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        parse_log_str(&content, &name, config)
    }

    /// Load every book in the input directory
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when the directory holds no log files, and `Batch`
    /// with one error per failing file when any file cannot be read or parsed.
    pub fn load_books(&self) -> Result<Vec<BookLog>> {
        let files = self.find_log_files()?;
        if files.is_empty() {
            return Err(ReadartError::EmptyInput(format!(
                "no reading logs found in {}",
                self.input_dir.display()
            )));
        }

        let progress = if self.show_progress {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} {msg} [{elapsed_precise}] {pos}/{len} logs")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb.set_message("Parsing reading logs");
            Some(pb)
        } else {
            None
        };

        let mut books = Vec::with_capacity(files.len());
        let mut errors = Vec::new();

        for path in &files {
            match Self::load_book(path, &self.config) {
                Ok(book) => books.push(book),
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        if !errors.is_empty() {
            return Err(ReadartError::Batch(errors));
        }

        info!(
            "Loaded {} books from {}",
            books.len(),
            self.input_dir.display()
        );
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> ParseConfig {
        ParseConfig::with_reference_year(2024)
    }

    #[test]
    fn test_find_log_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "1/1 1\n").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "1/1 1\n").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "junk").unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        fs::write(temp_dir.path().join("subdir").join("c.txt"), "1/1 1\n").unwrap();

        let loader = LogLoader::new(temp_dir.path(), config());
        let names: Vec<String> = loader
            .find_log_files()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_load_book_names_after_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Dune.txt");
        fs::write(&path, "1/3 1\n5/3 120\n").unwrap();

        let book = LogLoader::load_book(&path, &config()).unwrap();
        assert_eq!(book.name(), "Dune.txt");
        assert_eq!(book.entries().len(), 2);
    }

    #[test]
    fn test_missing_input_dir() {
        let temp_dir = TempDir::new().unwrap();
        let loader = LogLoader::new(temp_dir.path().join("nope"), config());
        assert!(matches!(
            loader.load_books(),
            Err(ReadartError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_input_dir() {
        let temp_dir = TempDir::new().unwrap();
        let loader = LogLoader::new(temp_dir.path(), config());
        assert!(matches!(
            loader.load_books(),
            Err(ReadartError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_all_failures_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "120\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "1/1 1\n2/1 20\n").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "1/1 x\n").unwrap();

        let loader = LogLoader::new(temp_dir.path(), config());
        match loader.load_books() {
            Err(ReadartError::Batch(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(matches!(errors[0], ReadartError::OrphanTerminalLine { .. }));
                assert!(matches!(errors[1], ReadartError::MalformedPage { .. }));
            }
            other => panic!("expected batch error, got {other:?}"),
        }
    }
}
