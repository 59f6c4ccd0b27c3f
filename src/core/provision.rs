//! Provisioning orchestration.
//!
//! One provisioning run is a two-outcome transaction: either the target
//! directory ends up fully populated, or it does not exist at all. Any
//! failure after the copy starts triggers best-effort deletion of the
//! partial tree, with the original failure always the one reported.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::identity::ProjectIdentity;
use crate::log_status;
use crate::materialize;
use crate::template::Replacements;

/// Result of a successful provisioning run.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionOutcome {
    pub location: PathBuf,
    pub files_copied: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Materialize the template at `template_dir` into `target_dir`.
///
/// Precondition failures (missing template, pre-existing target) are
/// reported before anything is created. A failure during the copy removes
/// whatever was created and re-raises the original error; a cleanup failure
/// is attached to it as a hint, never replacing it.
pub fn provision(
    identity: &ProjectIdentity,
    port: u16,
    template_dir: &Path,
    target_dir: &Path,
) -> Result<ProvisionOutcome> {
    if !template_dir.exists() {
        return Err(Error::config_template_missing(
            template_dir.display().to_string(),
        ));
    }

    if target_dir.exists() {
        return Err(Error::scaffold_target_exists(
            target_dir.display().to_string(),
        ));
    }

    let replacements = Replacements::new(identity, port);

    log_status!("new", "Copying template files to {}", target_dir.display());

    match materialize::copy_tree(template_dir, target_dir, &replacements) {
        Ok(report) => {
            for warning in &report.warnings {
                log_status!("new", "Warning: {}", warning);
            }
            Ok(ProvisionOutcome {
                location: target_dir.to_path_buf(),
                files_copied: report.files_copied,
                warnings: report.warnings,
            })
        }
        Err(err) => Err(rollback(target_dir, err)),
    }
}

/// Delete the partially built target, keeping the original error primary.
fn rollback(target_dir: &Path, original: Error) -> Error {
    if !target_dir.exists() {
        return original;
    }

    log_status!("new", "Cleaning up {}", target_dir.display());

    match fs::remove_dir_all(target_dir) {
        Ok(()) => original,
        Err(cleanup_err) => {
            log_status!(
                "new",
                "Cleanup of {} failed: {}",
                target_dir.display(),
                cleanup_err
            );
            original.with_hint(format!(
                "Cleanup of {} failed: {}; remove it manually",
                target_dir.display(),
                cleanup_err
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("MyPlugin").unwrap()
    }

    #[test]
    fn missing_template_is_a_config_error() {
        let out = TempDir::new().unwrap();
        let err = provision(
            &identity(),
            10120,
            Path::new("/nonexistent/template"),
            &out.path().join("plugin"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigTemplateMissing);
        assert!(!out.path().join("plugin").exists());
    }

    #[test]
    fn existing_target_is_rejected_without_mutation() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("file.txt"), "content").unwrap();

        let out = TempDir::new().unwrap();
        let target = out.path().join("plugin");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("precious.txt"), "keep me").unwrap();

        let err = provision(&identity(), 10120, src.path(), &target).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScaffoldTargetExists);
        // Never merge or overwrite
        assert_eq!(
            fs::read_to_string(target.join("precious.txt")).unwrap(),
            "keep me"
        );
        assert!(!target.join("file.txt").exists());
    }

    #[test]
    fn success_reports_location_and_file_count() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "{{PROJECT_NAME}}").unwrap();
        fs::write(src.path().join("b.txt"), "no tokens").unwrap();

        let out = TempDir::new().unwrap();
        let target = out.path().join("my-plugin");

        let outcome = provision(&identity(), 10120, src.path(), &target).unwrap();
        assert_eq!(outcome.location, target);
        assert_eq!(outcome.files_copied, 2);
        assert_eq!(fs::read_to_string(target.join("a.txt")).unwrap(), "MyPlugin");
    }

    #[cfg(unix)]
    #[test]
    fn failure_mid_copy_rolls_back_the_target() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "content").unwrap();
        fs::write(src.path().join("b.txt"), "content").unwrap();
        // A dangling symlink makes the byte copy fail partway through
        std::os::unix::fs::symlink(
            src.path().join("does-not-exist"),
            src.path().join("z-broken-link"),
        )
        .unwrap();

        let out = TempDir::new().unwrap();
        let target = out.path().join("plugin");

        let err = provision(&identity(), 10120, src.path(), &target).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
        assert!(!target.exists());
    }
}
