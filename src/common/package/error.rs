use std::io;

use thiserror::Error;

use super::Source;

/// Failures surfaced by listing, resolving and removing packages.
///
/// A missing backend binary and an unparseable output line are deliberately
/// absent: the first yields an empty listing and the second is skipped.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("no privilege elevation mechanism available: not running as root and neither pkexec nor sudo is on PATH")]
    NoElevationMechanism,

    #[error("`{command}` failed ({}): {}", describe_code(.code), diagnostic_text(.stderr, .stdout))]
    ExecutionFailure {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("refusing to run an empty command")]
    EmptyCommand,

    #[error("package '{0}' is not installed from any detected source")]
    UnknownPackage(String),

    #[error("package '{name}' is installed from several sources ({}); pass --source to pick one", join_sources(.sources))]
    AmbiguousPackage { name: String, sources: Vec<Source> },
}

impl PackageError {
    /// The most useful text to show a user: the backend's own stderr, then
    /// its stdout, then the error message itself.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::ExecutionFailure { stdout, stderr, .. }
                if !stderr.trim().is_empty() || !stdout.trim().is_empty() =>
            {
                diagnostic_text(stderr, stdout).to_string()
            }
            other => other.to_string(),
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn diagnostic_text<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    }
}

fn join_sources(sources: &[Source]) -> String {
    sources
        .iter()
        .map(|source| source.id())
        .collect::<Vec<_>>()
        .join(", ")
}
