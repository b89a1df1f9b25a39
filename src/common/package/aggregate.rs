//! Building one package listing out of every backend that applies to the
//! running distribution.

use super::listing::list_installed;
use super::{PackageError, PackageRecord, Source};
use crate::common::distro::DistroIdentity;

/// Distributions whose identity contains any of `needles` are queried
/// through `sources`, in order.
#[derive(Debug, Clone, Copy)]
pub struct RoutingRule {
    pub needles: &'static [&'static str],
    pub sources: &'static [Source],
}

impl RoutingRule {
    fn matches(&self, identity: &str) -> bool {
        self.needles.iter().any(|needle| identity.contains(needle))
    }
}

/// Evaluated top to bottom, first match wins.
pub const ROUTING_RULES: &[RoutingRule] = &[
    RoutingRule {
        needles: &["arch", "manjaro"],
        sources: &[Source::Pacman, Source::Aur, Source::Flatpak],
    },
    RoutingRule {
        needles: &["ubuntu", "debian", "mint"],
        sources: &[Source::Apt, Source::Flatpak],
    },
];

/// Used when no rule matches.
pub const DEFAULT_SOURCES: &[Source] = &[Source::Flatpak];

/// Backends to query for a distro identity.
pub fn sources_for(identity: &str) -> &'static [Source] {
    ROUTING_RULES
        .iter()
        .find(|rule| rule.matches(identity))
        .map_or(DEFAULT_SOURCES, |rule| rule.sources)
}

/// Enumerate packages for `identity`, listing each backend with `lister`.
///
/// Backends are queried one after another in routing order. The first
/// backend error is returned as is.
pub fn enumerate_with<F>(identity: &str, mut lister: F) -> Result<Vec<PackageRecord>, PackageError>
where
    F: FnMut(Source) -> Result<Vec<PackageRecord>, PackageError>,
{
    let mut records = Vec::new();
    for &source in sources_for(identity) {
        records.extend(lister(source)?);
    }
    Ok(records)
}

/// Enumerate every installed package on this system.
pub fn enumerate(aur_helper: Option<&str>) -> Result<Vec<PackageRecord>, PackageError> {
    let distro = DistroIdentity::detect();
    tracing::info!(
        distro = %distro,
        sources = ?sources_for(distro.as_str()),
        "enumerating packages"
    );
    enumerate_with(distro.as_str(), |source| list_installed(source, aur_helper))
}
