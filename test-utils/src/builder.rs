use serde_json::{json, Value};

use crate::{context::TestContext, error::TestError, factory::snapshot::SnapshotFactory};

/// Builder for creating test contexts with a seeded growth history file.
///
/// Snapshots are added to the fine-grained or daily log in the order given. When no
/// snapshots and no raw contents are configured, no file is written at all, which is
/// how a first start without history looks on disk.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_daily(SnapshotFactory::new().total_members(100))
///     .with_fine_grained(SnapshotFactory::new().total_members(120))
///     .build()?;
/// ```
pub struct TestBuilder {
    fine_grained: Vec<Value>,
    daily: Vec<Value>,
    /// Raw file contents; takes precedence over seeded snapshots.
    raw: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with nothing seeded.
    pub fn new() -> Self {
        Self {
            fine_grained: Vec::new(),
            daily: Vec::new(),
            raw: None,
        }
    }

    /// Appends a snapshot to the fine-grained log.
    pub fn with_fine_grained(mut self, snapshot: SnapshotFactory) -> Self {
        self.fine_grained.push(snapshot.build());
        self
    }

    /// Appends a snapshot to the daily log.
    pub fn with_daily(mut self, snapshot: SnapshotFactory) -> Self {
        self.daily.push(snapshot.build());
        self
    }

    /// Writes the given contents verbatim instead of a generated document.
    ///
    /// Use this to simulate corrupt or legacy files.
    pub fn with_raw_contents(mut self, contents: impl Into<String>) -> Self {
        self.raw = Some(contents.into());
        self
    }

    /// Builds the test context and writes the growth history file if anything was seeded.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose `data_file()` holds the seeded document
    /// - `Err(TestError)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(raw) = self.raw {
            context.write_raw(&raw)?;
        } else if !self.fine_grained.is_empty() || !self.daily.is_empty() {
            let document = json!({
                "fine_grained": self.fine_grained,
                "daily": self.daily,
            });
            context.write_raw(&serde_json::to_string_pretty(&document)?)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
