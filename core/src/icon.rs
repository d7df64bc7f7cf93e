//! Icon names and their terminal glyphs.
//!
//! A cheatsheet's `icon` field is free text. [`Icon::lookup`] maps it to a
//! known glyph, falling back to [`Icon::Default`] when the field is absent
//! or not recognized.

use serde::{Deserialize, Serialize};

/// Known icon glyphs.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::Icon;
///
/// assert_eq!(Icon::lookup(Some("git-branch")), Icon::GitBranch);
/// assert_eq!(Icon::lookup(Some("unicorn")), Icon::Default);
/// assert_eq!(Icon::lookup(None), Icon::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    GitBranch,
    Github,
    Container,
    Terminal,
    Package,
    Code,
    Database,
    Cloud,
    Server,
    Edit,
    #[default]
    #[serde(rename = "book")]
    Default,
}

impl Icon {
    /// Every icon, in declaration order.
    pub const ALL: [Icon; 11] = [
        Icon::GitBranch,
        Icon::Github,
        Icon::Container,
        Icon::Terminal,
        Icon::Package,
        Icon::Code,
        Icon::Database,
        Icon::Cloud,
        Icon::Server,
        Icon::Edit,
        Icon::Default,
    ];

    /// Resolves an optional icon name, falling back to [`Icon::Default`].
    pub fn lookup(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or_default()
    }

    /// Resolves an icon name, returning `None` when it is not recognized.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
    }

    /// Canonical symbolic name.
    pub fn name(self) -> &'static str {
        match self {
            Icon::GitBranch => "git-branch",
            Icon::Github => "github",
            Icon::Container => "container",
            Icon::Terminal => "terminal",
            Icon::Package => "package",
            Icon::Code => "code",
            Icon::Database => "database",
            Icon::Cloud => "cloud",
            Icon::Server => "server",
            Icon::Edit => "edit",
            Icon::Default => "book",
        }
    }

    /// Printable glyph used by terminal output.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::GitBranch => "⎇",
            Icon::Github => "◉",
            Icon::Container => "▣",
            Icon::Terminal => "❯",
            Icon::Package => "◫",
            Icon::Code => "⟨⟩",
            Icon::Database => "⛁",
            Icon::Cloud => "☁",
            Icon::Server => "▤",
            Icon::Edit => "✎",
            Icon::Default => "📖",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(Icon::lookup(Some(" Terminal ")), Icon::Terminal);
    }

    #[test]
    fn test_every_name_round_trips() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()), Some(icon));
        }
    }

    #[test]
    fn test_serde_names_match_symbolic_names() {
        for icon in Icon::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
            let back: Icon = serde_json::from_str(&json).unwrap();
            assert_eq!(back, icon);
        }
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(Icon::lookup(Some("")), Icon::Default);
    }
}
