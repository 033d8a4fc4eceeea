//! Recursive script discovery, ordering, and uniqueness validation.
//!
//! The loader walks a root directory for `.sql` files, orders the whole set
//! by execution phase and then by path, and rejects any set in which two
//! scripts share a filename, however far apart they live in the tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::file::{ConventionClassifier, ScriptClassifier, ScriptFile};
use crate::error::{MigrateGenError, Result};

/// The file extension that marks a migration script.
const SCRIPT_EXTENSION: &str = "sql";

/// Discovers and validates the full script set under one root directory.
pub struct ScriptLoader {
    root: PathBuf,
    classifier: Box<dyn ScriptClassifier>,
}

impl ScriptLoader {
    /// Create a loader over `root` using the default naming convention.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScriptLoader {
            root: root.into(),
            classifier: Box::new(ConventionClassifier),
        }
    }

    /// Replace the classification convention.
    pub fn with_classifier(mut self, classifier: impl ScriptClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Discover every script under the root, in canonical execution order.
    ///
    /// Order is execution phase first, full path second; together they fix
    /// the execution order of an entire migration run. The load fails as a
    /// whole if any two scripts share a filename, with one report listing
    /// every clash. An empty tree is an empty, successful result.
    pub fn load_all_files(&self) -> Result<Vec<ScriptFile>> {
        let root = self.root.canonicalize()?;

        let mut scripts = Vec::new();
        for entry in WalkDir::new(&root) {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_script(entry.path()) {
                continue;
            }
            debug!("Discovered script {:?}", entry.path());
            let kind = self.classifier.classify(entry.path());
            scripts.push(ScriptFile::load(entry.into_path(), kind)?);
        }

        scripts.sort_by(|a, b| {
            a.type_code()
                .cmp(&b.type_code())
                .then_with(|| a.file_path.as_os_str().cmp(b.file_path.as_os_str()))
        });
        check_unique_names(&scripts)?;

        info!("Loaded {} scripts from {:?}", scripts.len(), root);
        Ok(scripts)
    }
}

/// Whether the path carries the script extension. Matched without case, as
/// the filesystems these trees come from do.
fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
        .unwrap_or(false)
}

/// Reject the set when any base filename appears more than once, with one
/// aggregated report covering every clash.
fn check_unique_names(scripts: &[ScriptFile]) -> Result<()> {
    let mut by_name: BTreeMap<&str, Vec<&ScriptFile>> = BTreeMap::new();
    for script in scripts {
        by_name.entry(&script.file_name).or_default().push(script);
    }

    let mut report = String::new();
    for (name, group) in &by_name {
        if group.len() < 2 {
            continue;
        }
        report.push_str(&format!("Duplicate filename {:?}:\n", name));
        for script in group {
            report.push_str(&format!("\t{:?}\n", script.file_path));
        }
    }
    if report.is_empty() {
        return Ok(());
    }
    report.push_str(
        "\nAll script filenames must be unique, including those in separate subdirectories.",
    );
    Err(MigrateGenError::DuplicateFilename(report))
}
