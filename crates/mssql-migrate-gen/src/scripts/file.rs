//! Script descriptors and execution-phase classification.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Execution phase of a migration script, derived from its filename.
///
/// Phases order a whole run: every `Migration` executes before any
/// `Repeatable`, and within a phase scripts run in path order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScriptKind {
    /// Run-once, numbered migration script ("0001_create_users.sql").
    Migration,
    /// Re-runnable script ("rebuild_views.sql"), applied after all
    /// migrations on every run.
    Repeatable,
}

impl ScriptKind {
    /// Numeric ordering code; lower runs earlier.
    pub fn type_code(self) -> u8 {
        match self {
            ScriptKind::Migration => 1,
            ScriptKind::Repeatable => 2,
        }
    }
}

/// Assigns an execution phase to a discovered script path.
pub trait ScriptClassifier: Send + Sync {
    /// Classify one script by its path.
    fn classify(&self, path: &Path) -> ScriptKind;
}

/// Default naming convention: filenames that start with an ASCII digit are
/// one-time migrations, everything else is repeatable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionClassifier;

impl ScriptClassifier for ConventionClassifier {
    fn classify(&self, path: &Path) -> ScriptKind {
        let numbered = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with(|c: char| c.is_ascii_digit()))
            .unwrap_or(false);
        if numbered {
            ScriptKind::Migration
        } else {
            ScriptKind::Repeatable
        }
    }
}

/// One discovered migration script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptFile {
    /// Absolute path to the file.
    pub file_path: PathBuf,

    /// Base filename; must be unique across the whole script tree.
    pub file_name: String,

    /// Execution phase.
    pub kind: ScriptKind,

    /// Lower-case hex SHA-256 of the file contents, used to detect edits to
    /// already-applied scripts.
    pub checksum: String,
}

impl ScriptFile {
    /// Read one script from disk, hashing its contents.
    pub fn load(path: PathBuf, kind: ScriptKind) -> Result<ScriptFile> {
        let bytes = std::fs::read(&path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let checksum = format!("{:x}", hasher.finalize());

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(ScriptFile {
            file_path: path,
            file_name,
            kind,
            checksum,
        })
    }

    /// Numeric ordering code of the script's phase.
    pub fn type_code(&self) -> u8 {
        self.kind.type_code()
    }
}
