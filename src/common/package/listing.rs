//! Listing installed packages from a single backend.

use std::io;

use duct::cmd;

use super::parse::parse_listing;
use super::{PackageError, PackageRecord, Source};

/// List the packages installed through `source`.
///
/// A backend whose binary is not installed yields an empty list. The exit
/// status of the listing command is not inspected; whatever it printed on
/// stdout is parsed.
pub fn list_installed(
    source: Source,
    aur_helper: Option<&str>,
) -> Result<Vec<PackageRecord>, PackageError> {
    let argv = source.list_command(aur_helper);
    let Some(stdout) = capture_stdout(&argv)? else {
        tracing::debug!(source = source.id(), program = %argv[0], "backend not installed");
        return Ok(Vec::new());
    };

    let records = parse_listing(source, &stdout);
    tracing::debug!(
        source = source.id(),
        count = records.len(),
        "listed installed packages"
    );
    Ok(records)
}

/// Run a listing command and return its stdout, or `None` when the program
/// does not exist.
fn capture_stdout(argv: &[String]) -> Result<Option<String>, PackageError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(PackageError::EmptyCommand);
    };

    let output = match cmd(program, args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
    {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PackageError::Spawn {
                program: program.clone(),
                source,
            });
        }
    };

    if !output.stderr.is_empty() {
        tracing::debug!(
            command = %argv.join(" "),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "listing command wrote to stderr"
        );
    }

    Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_program_is_not_an_error() {
        let stdout = capture_stdout(&argv(&["appwatch-no-such-package-manager", "-Q"])).unwrap();
        assert_eq!(stdout, None);
    }

    #[test]
    fn test_failing_command_still_yields_stdout() {
        let stdout = capture_stdout(&argv(&[
            "/bin/sh",
            "-c",
            "printf 'bash 5.2.15-2\\n'; echo 'warning: partial' >&2; exit 1",
        ]))
        .unwrap();
        assert_eq!(stdout.as_deref(), Some("bash 5.2.15-2\n"));
    }

    #[test]
    fn test_aur_helper_that_does_not_exist_lists_nothing() {
        let records = list_installed(Source::Aur, Some("appwatch-no-such-aur-helper")).unwrap();
        assert!(records.is_empty());
    }
}
