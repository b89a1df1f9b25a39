//! Removing packages through the privileged executor.

use super::{PackageError, Source};
use crate::common::privilege::{CapturedOutput, run_privileged};

/// Remove `name` from `source`.
///
/// Always elevated and always non-interactive. Never retried: a failure is
/// returned with the backend's own output for the caller to show.
pub fn uninstall_package(
    source: Source,
    name: &str,
    aur_helper: Option<&str>,
) -> Result<CapturedOutput, PackageError> {
    let argv = source.uninstall_command(name, aur_helper);
    tracing::info!(source = source.id(), package = name, "uninstalling package");

    run_privileged(&argv)
        .inspect(|_| tracing::info!(source = source.id(), package = name, "package removed"))
        .inspect_err(|err| {
            tracing::error!(source = source.id(), package = name, error = %err, "uninstall failed")
        })
}
