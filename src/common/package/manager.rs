//! Package sources and the commands used to talk to them.

use clap::ValueEnum;
use serde::Serialize;

/// Where an installed package came from - SINGLE SOURCE OF TRUTH for backends.
///
/// Each variant knows the argv used to list its installed packages and the
/// argv used to remove one of them. Removal flags are always the
/// non-interactive ones so a privileged call never blocks on a TTY prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Pacman - native Arch Linux package manager
    Pacman,
    /// AUR helper (yay, paru, ...) - foreign packages on Arch
    Aur,
    /// Flatpak - sandboxed applications
    Flatpak,
    /// APT - Debian/Ubuntu system package manager
    Apt,
}

/// AUR helpers we know how to drive, in lookup order.
pub const AUR_HELPERS: &[&str] = &["yay", "paru", "pikaur", "trizen"];

/// Used when no AUR helper is configured or found on PATH.
pub const DEFAULT_AUR_HELPER: &str = "yay";

impl Source {
    pub const ALL: [Source; 4] = [Source::Pacman, Source::Aur, Source::Flatpak, Source::Apt];

    /// Label shown in listings (`source<TAB>name<TAB>version`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Aur => "yay/AUR",
            Self::Flatpak => "flatpak",
            Self::Apt => "apt",
        }
    }

    /// Short identifier accepted by `--source`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Aur => "aur",
            Self::Flatpak => "flatpak",
            Self::Apt => "apt",
        }
    }

    /// Binary invoked for this source.
    ///
    /// For the AUR the configured helper wins, then the first helper found
    /// on PATH, then [`DEFAULT_AUR_HELPER`].
    pub fn program(&self, aur_helper: Option<&str>) -> String {
        match self {
            Self::Pacman => "pacman".to_string(),
            Self::Aur => aur_helper
                .map(str::to_string)
                .or_else(|| detect_aur_helper().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_AUR_HELPER.to_string()),
            Self::Flatpak => "flatpak".to_string(),
            Self::Apt => "apt".to_string(),
        }
    }

    fn list_args(&self) -> &'static [&'static str] {
        match self {
            Self::Pacman => &["-Q"],
            Self::Aur => &["-Qm"],
            Self::Flatpak => &["list", "--columns=application,version"],
            Self::Apt => &["list", "--installed"],
        }
    }

    fn uninstall_args(&self) -> &'static [&'static str] {
        match self {
            Self::Pacman | Self::Aur => &["-Rns", "--noconfirm"],
            Self::Flatpak => &["uninstall", "-y"],
            Self::Apt => &["remove", "-y"],
        }
    }

    /// Full argv that lists installed packages.
    pub fn list_command(&self, aur_helper: Option<&str>) -> Vec<String> {
        let mut argv = vec![self.program(aur_helper)];
        argv.extend(self.list_args().iter().map(|arg| arg.to_string()));
        argv
    }

    /// Full argv that removes `name`, before any privilege elevation.
    pub fn uninstall_command(&self, name: &str, aur_helper: Option<&str>) -> Vec<String> {
        let mut argv = vec![self.program(aur_helper)];
        argv.extend(self.uninstall_args().iter().map(|arg| arg.to_string()));
        argv.push(name.to_string());
        argv
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detect available AUR helper (yay, paru, etc.)
///
/// Returns the name of the first available AUR helper found.
pub fn detect_aur_helper() -> Option<&'static str> {
    AUR_HELPERS
        .iter()
        .find(|&helper| which::which(helper).is_ok())
        .copied()
}
