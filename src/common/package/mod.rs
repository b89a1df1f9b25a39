//! Installed package enumeration and removal across package managers.
//!
//! # Architecture
//!
//! - [`Source`]: every supported backend and the argv it is driven with
//! - [`PackageRecord`]: one normalized `(source, name, version)` entry
//! - [`list_installed`]: one backend's listing, parsed defensively
//! - [`enumerate`]: the listing of every backend routed to by the distro
//! - [`uninstall_package`]: removal through the privileged executor
//!
//! # Routing
//!
//! | distro identity contains      | backends, in order         |
//! |-------------------------------|----------------------------|
//! | `arch`, `manjaro`             | pacman, AUR helper, flatpak |
//! | `ubuntu`, `debian`, `mint`    | apt, flatpak               |
//! | anything else                 | flatpak                    |

mod aggregate;
mod error;
mod listing;
mod manager;
mod parse;
mod record;
mod uninstall;

pub use aggregate::{enumerate, sources_for};
pub use error::PackageError;
pub use listing::list_installed;
pub use manager::Source;
pub use record::PackageRecord;
pub use uninstall::uninstall_package;
