//! Recursive template tree copy with placeholder substitution.
//!
//! Copies a source tree into a destination tree, skipping excluded
//! directories and file basenames, then rewrites each copied file's text
//! content through the replacement table. Files that are not valid UTF-8
//! keep their copied bytes and surface a warning instead of failing the run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::template::Replacements;
use crate::utils::io::write_file;

/// Directory names excluded from the copy at any depth, by exact match.
/// The whole subtree is skipped without descending.
pub const EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// File basenames excluded from the copy at any depth.
pub const EXCLUDED_FILES: [&str; 1] = ["package-lock.json"];

/// What a tree copy produced.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MaterializeReport {
    pub files_copied: usize,
    pub dirs_created: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Copy `source` into `dest` and substitute placeholders in every copied
/// text file. `source` is never mutated; `dest` and its ancestors are
/// created as needed.
pub fn copy_tree(source: &Path, dest: &Path, replacements: &Replacements) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();
    copy_dir(source, dest, replacements, &mut report)?;
    Ok(report)
}

fn copy_dir(
    source: &Path,
    dest: &Path,
    replacements: &Replacements,
    report: &mut MaterializeReport,
) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("create directory {}", dest.display())),
        )
    })?;
    report.dirs_created += 1;

    let entries = fs::read_dir(source).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("read directory {}", source.display())),
        )
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("read directory {}", source.display())),
            )
        })?;
        let name = entry.file_name();
        let file_type = entry.file_type().map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some(format!("stat {}", entry.path().display())),
            )
        })?;

        if file_type.is_dir() {
            if EXCLUDED_DIRS.iter().any(|excluded| name == *excluded) {
                continue;
            }
            copy_dir(&entry.path(), &dest.join(&name), replacements, report)?;
        } else {
            if EXCLUDED_FILES.iter().any(|excluded| name == *excluded) {
                continue;
            }
            copy_file(&entry.path(), &dest.join(&name), replacements, report)?;
        }
    }

    Ok(())
}

/// Copy one file byte-for-byte, then substitute placeholders in place.
///
/// A file that does not decode as UTF-8 keeps its verbatim copy; that is a
/// per-file warning, not a run failure. Copy and write failures abort.
fn copy_file(
    source: &Path,
    dest: &Path,
    replacements: &Replacements,
    report: &mut MaterializeReport,
) -> Result<()> {
    fs::copy(source, dest).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("copy {} to {}", source.display(), dest.display())),
        )
    })?;
    report.files_copied += 1;

    match fs::read_to_string(dest) {
        Ok(content) => {
            let substituted = replacements.apply(&content);
            if substituted != content {
                write_file(dest, &substituted, "substitute placeholders")?;
            }
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            report.warnings.push(format!(
                "Could not process {} as text; copied verbatim",
                dest.display()
            ));
            Ok(())
        }
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some(format!("read {}", dest.display())),
        )),
    }
}
