//! Target language registry.

use std::fmt;
use std::str::FromStr;

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Rust,
    TypeScript,
    Sql,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Rust,
        Language::TypeScript,
        Language::Sql,
    ];

    /// Canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
            Language::Sql => "sql",
        }
    }

    /// Accepted aliases, canonical name first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["python", "py"],
            Language::Rust => &["rust", "rs"],
            Language::TypeScript => &["typescript", "ts"],
            Language::Sql => &["sql", "ddl"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested language identifier matches nothing in the registry.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.aliases().contains(&normalized.as_str()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
