//! Query parameters: naming convention, acronym style and the query itself

use std::fmt;

/// Naming convention applied when composing an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CasingKind {
    /// `userName`
    Camel,
    /// `UserName`
    Pascal,
    /// `user_name`
    LowerUnderscore,
    /// `USER_NAME`
    UpperUnderscore,
    /// `user-name`
    Hyphen,
    /// Plain words separated by a space; also the "unset" value
    #[default]
    None,
}

impl CasingKind {
    /// Parse a casing from its configuration spelling
    ///
    /// Accepts `camel`, `pascal`, `lower underscore`, `upper underscore`,
    /// `hyphen` and `none`, case-insensitively. Returns `None` for anything else.
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "camel" => Some(CasingKind::Camel),
            "pascal" => Some(CasingKind::Pascal),
            "lower underscore" => Some(CasingKind::LowerUnderscore),
            "upper underscore" => Some(CasingKind::UpperUnderscore),
            "hyphen" => Some(CasingKind::Hyphen),
            "none" | "" => Some(CasingKind::None),
            _ => None,
        }
    }

    /// Name understood by the Codic API, or `None` to let the service decide
    pub fn api_name(self) -> Option<&'static str> {
        match self {
            CasingKind::Camel => Some("camel"),
            CasingKind::Pascal => Some("pascal"),
            CasingKind::LowerUnderscore => Some("lower underscore"),
            CasingKind::UpperUnderscore => Some("upper underscore"),
            CasingKind::Hyphen => Some("hyphen"),
            CasingKind::None => None,
        }
    }

    /// Whether acronym styles apply to this casing
    pub fn supports_acronyms(self) -> bool {
        matches!(self, CasingKind::Camel | CasingKind::Pascal)
    }
}

impl fmt::Display for CasingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name().unwrap_or("default"))
    }
}

/// Capitalization rule for all-uppercase tokens under camel/pascal casing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AcronymKind {
    /// Two-letter acronyms stay upper-case, longer ones are capitalized
    MsNamingGuidelines,
    /// Every acronym is capitalized like a regular word
    CamelStrict,
    /// Acronyms are kept as written
    Literal,
    #[default]
    None,
}

impl AcronymKind {
    /// Parse an acronym style from its configuration spelling
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ms naming guidelines" => Some(AcronymKind::MsNamingGuidelines),
            "camel strict" => Some(AcronymKind::CamelStrict),
            "literal" => Some(AcronymKind::Literal),
            "none" | "" => Some(AcronymKind::None),
            _ => None,
        }
    }

    /// Name the Codic API expects, or `None` when the style is unset
    pub fn api_name(self) -> Option<&'static str> {
        match self {
            AcronymKind::MsNamingGuidelines => Some("MS naming guidelines"),
            AcronymKind::CamelStrict => Some("camel strict"),
            AcronymKind::Literal => Some("literal"),
            AcronymKind::None => None,
        }
    }

    /// The style that actually applies under `casing`
    pub fn effective_for(self, casing: CasingKind) -> Self {
        if casing.supports_acronyms() {
            self
        } else {
            AcronymKind::None
        }
    }
}

impl fmt::Display for AcronymKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name().unwrap_or("default"))
    }
}

/// A translation request for one navigation session
///
/// The acronym style is normalized against the casing on construction, so a
/// `Query` never carries an acronym style its casing ignores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub project_id: Option<String>,
    pub casing: CasingKind,
    pub acronym_style: AcronymKind,
}

impl Query {
    /// Create a query for `text`
    ///
    /// # Arguments
    ///
    /// * `text` - Phrase to name; surrounding whitespace is trimmed
    /// * `casing` - Naming convention of the composed identifier
    /// * `acronym_style` - Acronym rule; reset to `None` unless `casing` is
    ///   camel or pascal
    ///
    /// # Example
    ///
    /// ```ignore
    /// let query = Query::new(" ユーザー名 ", CasingKind::Pascal, AcronymKind::Literal)
    ///     .with_project("42");
    /// assert_eq!(query.text, "ユーザー名");
    /// ```
    pub fn new(text: &str, casing: CasingKind, acronym_style: AcronymKind) -> Self {
        Self {
            text: text.trim().to_string(),
            project_id: None,
            casing,
            acronym_style: acronym_style.effective_for(casing),
        }
    }

    /// Attach a Codic project (dictionary) id; blank ids are ignored
    pub fn with_project(mut self, project_id: &str) -> Self {
        let project_id = project_id.trim();
        self.project_id = (!project_id.is_empty()).then(|| project_id.to_string());
        self
    }

    /// Nothing to translate
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Short description of the query settings, e.g. `[42] (pascal, literal)`
    pub fn settings_label(&self) -> String {
        let project = self
            .project_id
            .as_ref()
            .map(|id| format!("[{}] ", id))
            .unwrap_or_default();
        let acronym = if self.casing.supports_acronyms() {
            format!(", {}", self.acronym_style)
        } else {
            String::new()
        };
        format!("{}({}{})", project, self.casing, acronym)
    }

    /// Description shown next to the whole-result item
    pub fn describe(&self) -> String {
        format!("Codic Translate {}: {}", self.settings_label(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casing_from_config() {
        assert_eq!(CasingKind::from_config("Camel"), Some(CasingKind::Camel));
        assert_eq!(
            CasingKind::from_config(" lower underscore "),
            Some(CasingKind::LowerUnderscore)
        );
        assert_eq!(CasingKind::from_config(""), Some(CasingKind::None));
        assert_eq!(CasingKind::from_config("snake"), None);
    }

    #[test]
    fn test_acronym_from_config() {
        assert_eq!(
            AcronymKind::from_config("MS Naming Guidelines"),
            Some(AcronymKind::MsNamingGuidelines)
        );
        assert_eq!(AcronymKind::from_config("strict"), None);
    }

    #[test]
    fn test_api_names() {
        assert_eq!(
            CasingKind::UpperUnderscore.api_name(),
            Some("upper underscore")
        );
        assert_eq!(CasingKind::None.api_name(), None);
        assert_eq!(
            AcronymKind::MsNamingGuidelines.api_name(),
            Some("MS naming guidelines")
        );
    }

    #[test]
    fn test_query_trims_text() {
        let query = Query::new("  user name \n", CasingKind::Camel, AcronymKind::None);
        assert_eq!(query.text, "user name");
        assert!(!query.is_empty());
        assert!(Query::new("   ", CasingKind::Camel, AcronymKind::None).is_empty());
    }

    #[test]
    fn test_query_normalizes_acronym_style() {
        let query = Query::new("id", CasingKind::LowerUnderscore, AcronymKind::Literal);
        assert_eq!(query.acronym_style, AcronymKind::None);

        let query = Query::new("id", CasingKind::Pascal, AcronymKind::Literal);
        assert_eq!(query.acronym_style, AcronymKind::Literal);
    }

    #[test]
    fn test_blank_project_is_ignored() {
        let query = Query::new("a", CasingKind::Camel, AcronymKind::None).with_project("  ");
        assert_eq!(query.project_id, None);
    }

    #[test]
    fn test_describe() {
        let query = Query::new("user name", CasingKind::Pascal, AcronymKind::None)
            .with_project("123");
        assert_eq!(
            query.describe(),
            "Codic Translate [123] (pascal, default): user name"
        );

        let query = Query::new("user name", CasingKind::Hyphen, AcronymKind::Literal);
        assert_eq!(query.describe(), "Codic Translate (hyphen): user name");

        let query = Query::new("user name", CasingKind::None, AcronymKind::None);
        assert_eq!(query.describe(), "Codic Translate (default): user name");
    }
}
