//! Directory-backed storage of editorconfig snippets.
//!
//! Layout: `<root>/<language>/<name>.editorconfig`. Every operation touches the
//! filesystem directly and closes its handles before returning.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Extension given to snippet files created by `new`
pub const SNIPPET_EXTENSION: &str = "editorconfig";

/// A snippet file inside a language directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub file_name: String,
    pub display_name: String,
}

impl Snippet {
    pub fn from_file_name(file_name: String) -> Self {
        let display_name = Path::new(&file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| file_name.clone());

        Self {
            file_name,
            display_name,
        }
    }
}

/// Checks that a language or snippet name stays inside its parent directory.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] for empty names, `.`, `..` and names
/// containing a path separator.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::InvalidName(name.to_string()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidName(name.to_string()));
    }

    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[derive(Debug, Clone)]
pub struct SnippetStore {
    root: PathBuf,
}

impl SnippetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a language directory. The directory may not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the language name is invalid.
    pub fn language_dir(&self, language: &str) -> Result<PathBuf> {
        validate_name(language)?;
        Ok(self.root.join(language))
    }

    /// Path of a snippet file. The file may not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is invalid.
    pub fn snippet_path(&self, language: &str, file_name: &str) -> Result<PathBuf> {
        validate_name(file_name)?;
        Ok(self.language_dir(language)?.join(file_name))
    }

    pub fn language_exists(&self, language: &str) -> bool {
        self.language_dir(language)
            .map(|dir| dir.is_dir())
            .unwrap_or(false)
    }

    /// Creates the root directory (and only it) when absent.
    ///
    /// Returns `true` if the directory was created by this call.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails for any reason other than the
    /// directory already existing.
    pub fn ensure_root(&self) -> Result<bool> {
        match fs::create_dir(&self.root) {
            Ok(()) => {
                debug!("Created root directory `{}`", display(&self.root));
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists && self.root.is_dir() => Ok(false),
            Err(e) => Err(Error::io_error("root directory", &display(&self.root), e)),
        }
    }

    /// Names of all language directories under the root, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be read.
    pub fn list_languages(&self) -> Result<Vec<String>> {
        let mut languages = self.read_dir_names(&self.root, "root directory", |path| {
            path.is_dir()
        })?;
        languages.sort();
        Ok(languages)
    }

    /// Snippet files of one language, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the language directory does not exist.
    pub fn list_snippets(&self, language: &str) -> Result<Vec<Snippet>> {
        let language_dir = self.language_dir(language)?;
        let mut file_names =
            self.read_dir_names(&language_dir, "language directory", |path| path.is_file())?;
        file_names.sort();

        Ok(file_names.into_iter().map(Snippet::from_file_name).collect())
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the snippet does not exist.
    pub fn read_snippet(&self, language: &str, file_name: &str) -> Result<Vec<u8>> {
        let path = self.snippet_path(language, file_name)?;
        fs::read(&path).map_err(|e| Error::io_error("snippet", &display(&path), e))
    }

    /// Creates or overwrites a snippet file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written, including when the
    /// language directory does not exist.
    pub fn write_snippet(&self, language: &str, file_name: &str, content: &[u8]) -> Result<()> {
        let path = self.snippet_path(language, file_name)?;
        fs::write(&path, content).map_err(|e| Error::io_error("snippet", &display(&path), e))
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the snippet does not exist.
    pub fn delete_snippet(&self, language: &str, file_name: &str) -> Result<()> {
        let path = self.snippet_path(language, file_name)?;
        fs::remove_file(&path).map_err(|e| Error::io_error("snippet", &display(&path), e))
    }

    fn read_dir_names(
        &self,
        dir: &Path,
        description: &str,
        keep: impl Fn(&Path) -> bool,
    ) -> Result<Vec<String>> {
        let entries =
            fs::read_dir(dir).map_err(|e| Error::io_error(description, &display(dir), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io_error(description, &display(dir), e))?;
            if keep(&entry.path()) {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        Ok(names)
    }
}
