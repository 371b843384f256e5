use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// Name of the growth history file inside the test directory.
pub const DATA_FILE_NAME: &str = "growth_data.json";

/// Test context owning a temporary directory for the growth history file.
///
/// The directory and everything in it is removed when the context is dropped, so
/// keep the context alive for as long as the test uses the file.
pub struct TestContext {
    /// Temporary directory holding the growth history file.
    pub dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no growth history file written yet
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the growth history file, whether or not it exists yet.
    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join(DATA_FILE_NAME)
    }

    /// Path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes raw contents to the growth history file.
    ///
    /// # Arguments
    /// - `contents` - Exact bytes to write, valid JSON or not
    pub fn write_raw(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.data_file(), contents)?;
        Ok(())
    }

    /// Reads the growth history file back as untyped JSON.
    ///
    /// Lets tests assert on the on-disk format independently of the application's
    /// own deserialization.
    ///
    /// # Returns
    /// - `Ok(serde_json::Value)` - Parsed file contents
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_json(&self) -> Result<serde_json::Value, TestError> {
        let contents = std::fs::read_to_string(self.data_file())?;
        Ok(serde_json::from_str(&contents)?)
    }
}
