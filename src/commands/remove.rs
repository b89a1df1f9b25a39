//! `appwatch remove`: uninstall one package.

use anyhow::{Context, Result};
use dialoguer::Confirm;

use crate::common::config::AppConfig;
use crate::common::package::{
    PackageError, PackageRecord, Source, enumerate, uninstall_package,
};
use crate::ui::prelude::*;

#[derive(Debug, Clone)]
pub struct RemoveRequest<'a> {
    pub name: &'a str,
    pub source: Option<Source>,
    pub dry_run: bool,
    pub assume_yes: bool,
}

pub fn run_remove(config: &AppConfig, request: &RemoveRequest<'_>) -> Result<i32> {
    let source = match request.source {
        Some(source) => source,
        None => {
            let records = enumerate(config.aur_helper())
                .context("listing installed packages to find the package source")?;
            resolve_source(request.name, &records)?
        }
    };

    let command = source
        .uninstall_command(request.name, config.aur_helper())
        .join(" ");

    if request.dry_run || config.dry_run {
        tracing::info!(command = %command, "dry run: would run");
        emit(
            Level::Info,
            "remove.dry_run",
            &format!("Would run: {command}"),
            Some(serde_json::json!({ "command": command })),
        );
        return Ok(0);
    }

    if config.confirm && !request.assume_yes && !confirm_removal(request.name, source)? {
        emit(
            Level::Info,
            "remove.cancelled",
            &format!("{} Uninstall cancelled.", char::from(NerdFont::Info)),
            None,
        );
        return Ok(0);
    }

    emit(
        Level::Debug,
        "remove.running",
        &format!("{} Running: {command}", char::from(NerdFont::Terminal)),
        None,
    );

    match uninstall_package(source, request.name, config.aur_helper()) {
        Ok(output) => {
            for text in [&output.stdout, &output.stderr] {
                if !text.trim().is_empty() {
                    emit(Level::Debug, "remove.output", text.trim_end(), None);
                }
            }
            emit(
                Level::Success,
                "remove.done",
                &format!("{} {} removed", char::from(NerdFont::Check), request.name),
                Some(serde_json::json!({ "name": request.name, "source": source.id() })),
            );
            Ok(0)
        }
        Err(err @ (PackageError::ExecutionFailure { .. } | PackageError::NoElevationMechanism)) => {
            emit(
                Level::Error,
                "remove.failed",
                &format!(
                    "{} Uninstall failed: {}",
                    char::from(NerdFont::Cross),
                    err.diagnostic()
                ),
                None,
            );
            Ok(1)
        }
        Err(err) => Err(err).with_context(|| format!("removing {} from {}", request.name, source)),
    }
}

/// Find which backend `name` was installed from.
pub fn resolve_source(name: &str, records: &[PackageRecord]) -> Result<Source, PackageError> {
    let mut sources: Vec<Source> = Vec::new();
    for record in records.iter().filter(|record| record.name == name) {
        if !sources.contains(&record.source) {
            sources.push(record.source);
        }
    }

    match sources.len() {
        0 => Err(PackageError::UnknownPackage(name.to_string())),
        1 => Ok(sources[0]),
        _ => Err(PackageError::AmbiguousPackage {
            name: name.to_string(),
            sources,
        }),
    }
}

fn confirm_removal(name: &str, source: Source) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "{} Remove {name} from {}?",
            char::from(NerdFont::Question),
            source.label()
        ))
        .default(false)
        .interact()
        .context("reading uninstall confirmation (pass --yes to skip)")
}
