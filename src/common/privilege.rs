//! Privilege elevation for mutating package commands.
//!
//! Every uninstall goes through [`run_privileged`]. The elevation strategy is
//! chosen fresh for each call: already root, then a polkit agent (`pkexec`),
//! then `sudo`. If none applies the command is not run at all.

use std::path::PathBuf;

use duct::cmd;
use sudo::RunningAs;

use crate::common::package::PackageError;

pub const AGENT_PROGRAM: &str = "pkexec";
pub const TRADITIONAL_PROGRAM: &str = "sudo";

/// How a privileged command will be launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevationStrategy {
    /// Effective uid is already root; run the command as is.
    AlreadyRoot,
    /// One-shot polkit elevation agent.
    Agent(PathBuf),
    /// Classic `sudo`.
    Traditional(PathBuf),
}

impl ElevationStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AlreadyRoot => "root",
            Self::Agent(_) => AGENT_PROGRAM,
            Self::Traditional(_) => TRADITIONAL_PROGRAM,
        }
    }

    /// Prefix `argv` with the elevation program, if any.
    pub fn apply(&self, argv: &[String]) -> Vec<String> {
        let prefix = match self {
            Self::AlreadyRoot => None,
            Self::Agent(path) | Self::Traditional(path) => Some(path.display().to_string()),
        };
        prefix.into_iter().chain(argv.iter().cloned()).collect()
    }
}

/// What the strategy selection needs to know about the running system.
pub trait ElevationProbe {
    fn is_root(&self) -> bool;
    fn find_program(&self, name: &str) -> Option<PathBuf>;
}

/// Probes the real process and PATH.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ElevationProbe for SystemProbe {
    fn is_root(&self) -> bool {
        matches!(sudo::check(), RunningAs::Root | RunningAs::Suid)
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Pick exactly one strategy, in priority order.
pub fn select_strategy(probe: &impl ElevationProbe) -> Result<ElevationStrategy, PackageError> {
    if probe.is_root() {
        return Ok(ElevationStrategy::AlreadyRoot);
    }
    if let Some(path) = probe.find_program(AGENT_PROGRAM) {
        return Ok(ElevationStrategy::Agent(path));
    }
    if let Some(path) = probe.find_program(TRADITIONAL_PROGRAM) {
        return Ok(ElevationStrategy::Traditional(path));
    }
    Err(PackageError::NoElevationMechanism)
}

/// Captured text of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run `argv` with root privileges.
pub fn run_privileged(argv: &[String]) -> Result<CapturedOutput, PackageError> {
    run_privileged_with(&SystemProbe, argv)
}

pub fn run_privileged_with(
    probe: &impl ElevationProbe,
    argv: &[String],
) -> Result<CapturedOutput, PackageError> {
    let strategy = select_strategy(probe).inspect_err(|_| {
        tracing::warn!(command = %argv.join(" "), "no elevation mechanism available");
    })?;
    let elevated = strategy.apply(argv);
    tracing::info!(
        strategy = strategy.name(),
        command = %elevated.join(" "),
        "running privileged command"
    );
    execute(&elevated)
}

/// Run `argv` as given, capturing stdout and stderr.
///
/// A non-zero exit becomes [`PackageError::ExecutionFailure`] carrying the
/// captured text.
pub(crate) fn execute(argv: &[String]) -> Result<CapturedOutput, PackageError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(PackageError::EmptyCommand);
    };

    let output = cmd(program, args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
        .map_err(|source| PackageError::Spawn {
            program: program.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(PackageError::ExecutionFailure {
            command: argv.join(" "),
            code: output.status.code(),
            stdout,
            stderr,
        });
    }

    Ok(CapturedOutput { stdout, stderr })
}
