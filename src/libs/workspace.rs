use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROOT_DIR_NAME: &str = "onit";
pub const DAY_DIR_NAME: &str = "days";
pub const NOTE_DIR_NAME: &str = "notes";
pub const ARCHIVE_DIR_NAME: &str = "archive";
pub const QUERY_DIR_NAME: &str = "query";

/// Resolves the onit directory layout under the user's home directory.
///
/// All day files, notes, saved queries and the configuration file live
/// below a single root (`~/onit` by default). The `archive/` directory is
/// created on init but not written to yet.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let home = match OS {
            "windows" => var("USERPROFILE").unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()),
        };
        Self {
            root: Path::new(&home).join(ROOT_DIR_NAME),
        }
    }

    /// Builds a workspace rooted at an explicit path instead of the home
    /// directory. Used by tests and by anyone pointing onit elsewhere.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn day_dir(&self) -> PathBuf {
        self.root.join(DAY_DIR_NAME)
    }

    pub fn note_dir(&self) -> PathBuf {
        self.root.join(NOTE_DIR_NAME)
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.root.join(ARCHIVE_DIR_NAME)
    }

    pub fn query_dir(&self) -> PathBuf {
        self.root.join(QUERY_DIR_NAME)
    }

    /// Every directory `init` is responsible for, the root first.
    pub fn all_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.root.clone(),
            self.day_dir(),
            self.note_dir(),
            self.archive_dir(),
            self.query_dir(),
        ]
    }

    /// Resolves a file directly under the root, creating the root if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(self.root.join(file_name))
    }

    pub fn day_path(&self, file_name: &str) -> Result<PathBuf> {
        Self::resolve(self.day_dir(), file_name)
    }

    pub fn note_path(&self, file_name: &str) -> Result<PathBuf> {
        Self::resolve(self.note_dir(), file_name)
    }

    pub fn query_path(&self, file_name: &str) -> Result<PathBuf> {
        Self::resolve(self.query_dir(), file_name)
    }

    fn resolve(dir: PathBuf, file_name: &str) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir.join(file_name))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
