//! `appwatch info`: what appwatch sees on this machine.

use anyhow::Result;

use crate::common::config::AppConfig;
use crate::common::distro::DistroIdentity;
use crate::common::package::{Source, enumerate, sources_for};
use crate::common::privilege::{SystemProbe, select_strategy};
use crate::ui::prelude::*;

const SESSION_VARS: &[&str] = &["DISPLAY", "WAYLAND_DISPLAY", "XDG_SESSION_TYPE"];

pub fn run_info(config: &AppConfig) -> Result<i32> {
    let distro = DistroIdentity::detect();
    let sources = sources_for(distro.as_str());

    for var in SESSION_VARS {
        let value = std::env::var(var).unwrap_or_default();
        emit(
            Level::Info,
            "info.env",
            &format!("ENV {var}={value}"),
            Some(serde_json::json!({ "name": var, "value": value })),
        );
    }

    emit(
        Level::Info,
        "info.distro",
        &format!("{} Detected distro: {distro}", char::from(NerdFont::Terminal)),
        Some(serde_json::json!({
            "distro": distro.as_str(),
            "sources": sources.iter().map(Source::id).collect::<Vec<_>>(),
        })),
    );

    if distro.is_unknown() {
        emit(
            Level::Warn,
            "info.distro_unknown",
            &format!(
                "{} No os-release ID found; only flatpak will be listed",
                char::from(NerdFont::Warning)
            ),
            None,
        );
    }

    emit(Level::Info, "info.binaries", "Binaries present:", None);
    for source in Source::ALL {
        let program = source.program(config.aur_helper());
        let location = which::which(&program)
            .map(|path| path.display().to_string())
            .ok();
        emit(
            Level::Info,
            "info.binary",
            &format!(
                "  {:<8} {} -> {}",
                source.id(),
                program,
                location.as_deref().unwrap_or("not found")
            ),
            Some(serde_json::json!({
                "source": source.id(),
                "program": program,
                "path": location,
            })),
        );
    }

    match select_strategy(&SystemProbe) {
        Ok(strategy) => emit(
            Level::Info,
            "info.elevation",
            &format!(
                "{} Elevation: {}",
                char::from(NerdFont::Shield),
                strategy.name()
            ),
            Some(serde_json::json!({ "strategy": strategy.name() })),
        ),
        Err(err) => emit(
            Level::Warn,
            "info.elevation",
            &format!("{} {err}", char::from(NerdFont::Warning)),
            None,
        ),
    }

    match enumerate(config.aur_helper()) {
        Ok(records) => {
            emit(
                Level::Info,
                "info.count",
                &format!(
                    "{} Detected apps count: {}",
                    char::from(NerdFont::Package),
                    records.len()
                ),
                Some(serde_json::json!({ "count": records.len() })),
            );
            Ok(0)
        }
        Err(err) => {
            emit(
                Level::Error,
                "info.list_failed",
                &format!("Error listing apps: {err}"),
                None,
            );
            Ok(super::list::EXIT_ENUMERATION_FAILED)
        }
    }
}
