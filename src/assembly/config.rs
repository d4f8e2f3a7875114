use crate::error::{AssemblyError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// `import System.Reflection;` as a statement of its own, not a prefix of
/// `System.Reflection.Emit` and friends.
static JSCRIPT_REFLECTION_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*import[ \t]+System\.Reflection[ \t]*;")
        .expect("JScript import pattern compiles")
});

/// Source dialect of the document being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// `AssemblyInfo.cs`: names are kept as written, suffix mode is learned
    /// from the declarations seen.
    #[default]
    #[serde(alias = "cs", alias = "c#")]
    CSharp,
    /// `AssemblyInfo.js` (JScript .NET): Pascal-cased keys, marker attributes,
    /// always-suffixed names and an `import System.Reflection;` header.
    #[serde(alias = "js")]
    JScript,
}

impl Language {
    /// Whether every written attribute name carries the `Attribute` suffix.
    pub fn always_suffixed(self) -> bool {
        matches!(self, Language::JScript)
    }

    /// Header line the dialect requires at the top of a document, if any.
    pub fn preamble(self) -> Option<&'static str> {
        match self {
            Language::CSharp => None,
            Language::JScript => Some("import System.Reflection;"),
        }
    }

    /// Whether `text` already carries the header from [`Language::preamble`].
    pub fn has_preamble(self, text: &str) -> bool {
        match self {
            Language::CSharp => true,
            Language::JScript => JSCRIPT_REFLECTION_IMPORT.is_match(text),
        }
    }
}

impl FromStr for Language {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            "jscript" | "js" => Ok(Language::JScript),
            other => Err(AssemblyError::Usage(format!("Unknown language: {}", other))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::CSharp => f.write_str("csharp"),
            Language::JScript => f.write_str("jscript"),
        }
    }
}

/// Options applied when a document is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOptions {
    #[serde(default)]
    pub language: Language,
}

impl DocumentOptions {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Load options from a JSON file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let options: DocumentOptions = serde_json::from_str(&content)?;
        Ok(options)
    }
}

/// Options applied when rendering a document back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Prepend the dialect's header when the text lacks it.
    #[serde(default = "default_preamble")]
    pub preamble: bool,
}

fn default_preamble() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { preamble: true }
    }
}
