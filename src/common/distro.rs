use std::fs;
use std::path::Path;

/// Release files consulted in order, per os-release(5).
const OS_RELEASE_PATHS: &[&str] = &["/etc/os-release", "/usr/lib/os-release"];

/// Returned when no release file yields an `ID`.
pub const UNKNOWN_DISTRO: &str = "unknown";

/// Lowercase distribution identity such as `arch`, `ubuntu` or `manjaro`.
///
/// Detected fresh on every listing; backend routing matches on substrings of
/// it, so derivatives like `archarm` route with their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroIdentity(String);

impl DistroIdentity {
    /// Detect the current distribution. Never fails; falls back to
    /// [`UNKNOWN_DISTRO`].
    pub fn detect() -> Self {
        Self::detect_from(OS_RELEASE_PATHS.iter().map(Path::new))
    }

    fn detect_from<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let id = paths
            .into_iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .find_map(|content| parse_os_release_id(&content));

        match id {
            Some(id) => Self(id),
            None => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_DISTRO.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_DISTRO
    }
}

impl std::fmt::Display for DistroIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract the lowercased `ID=` value from os-release content.
pub fn parse_os_release_id(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("ID="))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_lowercase())
        .find(|id| !id.is_empty())
}
