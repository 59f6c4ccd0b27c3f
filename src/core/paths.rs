//! Packaged template location.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment override for the packaged template location.
pub const TEMPLATE_DIR_ENV: &str = "CAREPLUG_TEMPLATE_DIR";

/// Resolve the packaged template directory.
///
/// Checks `CAREPLUG_TEMPLATE_DIR` first, then a `template` directory next
/// to the installed binary, then the source checkout's `template` directory
/// for development builds. Existence of the result is verified by the
/// orchestrator, which takes the resolved path as an explicit parameter so
/// the engine stays testable against arbitrary fixture trees.
pub fn template_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(TEMPLATE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let exe = env::current_exe()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve executable path".to_string())))?;
    let exe_dir = exe.parent().ok_or_else(|| {
        Error::internal_unexpected(format!(
            "Executable path {} has no parent directory",
            exe.display()
        ))
    })?;

    let installed = exe_dir.join("template");
    if installed.exists() {
        return Ok(installed);
    }

    Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("template"))
}
