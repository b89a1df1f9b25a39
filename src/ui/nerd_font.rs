/// Nerd font icons used in appwatch output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerdFont {
    // Status and feedback
    Check,
    Cross,
    Warning,
    Info,
    Question,

    // System
    Terminal,
    Bug,
    Shield,

    // Packages
    Package,
}

impl NerdFont {
    /// Get the Unicode character for this nerd font icon
    pub const fn unicode(&self) -> char {
        match self {
            Self::Check => '\u{f00c}',    // fa-check
            Self::Cross => '\u{f00d}',    // fa-times
            Self::Warning => '\u{f071}',  // fa-exclamation-triangle
            Self::Info => '\u{f05a}',     // fa-info-circle
            Self::Question => '\u{f059}', // fa-question-circle

            Self::Terminal => '\u{f120}', // fa-terminal
            Self::Bug => '\u{f188}',      // fa-bug
            Self::Shield => '\u{f132}',   // fa-shield

            Self::Package => '\u{f187}', // fa-archive
        }
    }
}

impl std::fmt::Display for NerdFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unicode())
    }
}

impl From<NerdFont> for char {
    fn from(icon: NerdFont) -> Self {
        icon.unicode()
    }
}
