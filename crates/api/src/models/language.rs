use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Source language of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Language(#[schemars(with = "String")] Cow<'static, str>);

impl Language {
    pub const MARKDOWN: Language = Language(Cow::Borrowed("markdown"));
    pub const JAVA: Language = Language(Cow::Borrowed("java"));
    pub const RUST: Language = Language(Cow::Borrowed("rust"));
    pub const PYTHON: Language = Language(Cow::Borrowed("python"));
    pub const TYPESCRIPT: Language = Language(Cow::Borrowed("typescript"));
    pub const PHP: Language = Language(Cow::Borrowed("php"));
    pub const GO: Language = Language(Cow::Borrowed("go"));
    pub const UNKNOWN: Language = Language(Cow::Borrowed("unknown"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Map a file extension to a Language.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Self::MARKDOWN,
            "java" => Self::JAVA,
            "rs" => Self::RUST,
            "py" => Self::PYTHON,
            "ts" | "tsx" => Self::TYPESCRIPT,
            "php" => Self::PHP,
            "go" => Self::GO,
            "" => Self::UNKNOWN,
            ext => Self::new(ext.to_string()),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Identity token of a symbol provider.
///
/// Provider quirks (kind remapping, overview shape) are keyed by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ProviderId(#[schemars(with = "String")] Cow<'static, str>);

impl ProviderId {
    pub const MARKSMAN: ProviderId = ProviderId(Cow::Borrowed("marksman"));
    pub const MARKDOWN_HEADINGS: ProviderId = ProviderId(Cow::Borrowed("markdown-headings"));
    pub const RECORDED: ProviderId = ProviderId(Cow::Borrowed("recorded"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
