//! Actions available on a finalized identifier
//!
//! Resolving an action yields a [`SideEffect`] describing what to do; the
//! caller owns the clipboard and the browser.

use std::fmt;
use std::str::FromStr;

use crate::naming::codic::browse_url;
use crate::naming::error::{NamingError, NamingResult};
use crate::naming::navigation::FinalName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultAction {
    /// Copy the identifier to the clipboard
    #[default]
    CopyResult,
    /// Open the query on the Codic site
    Browse,
    /// Open the query on the Codic site in a private window
    BrowsePrivate,
    /// Copy the Codic URL of the query to the clipboard
    CopyUrl,
}

impl ResultAction {
    pub const ALL: [ResultAction; 4] = [
        ResultAction::CopyResult,
        ResultAction::Browse,
        ResultAction::BrowsePrivate,
        ResultAction::CopyUrl,
    ];

    /// Identifier used in settings and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ResultAction::CopyResult => "copy_result",
            ResultAction::Browse => "browse",
            ResultAction::BrowsePrivate => "browse_private",
            ResultAction::CopyUrl => "copy_url",
        }
    }

    /// Human-readable menu label
    pub fn label(self) -> &'static str {
        match self {
            ResultAction::CopyResult => "Copy result",
            ResultAction::Browse => "Open in browser",
            ResultAction::BrowsePrivate => "Open in browser (Private Mode)",
            ResultAction::CopyUrl => "Copy URL",
        }
    }

    /// Work out the side effect for `name`
    pub fn resolve(self, name: &FinalName) -> NamingResult<SideEffect> {
        Ok(match self {
            ResultAction::CopyResult => SideEffect::SetClipboard(name.label.clone()),
            ResultAction::Browse => SideEffect::OpenBrowser {
                url: browse_url(&name.query)?,
                private: false,
            },
            ResultAction::BrowsePrivate => SideEffect::OpenBrowser {
                url: browse_url(&name.query)?,
                private: true,
            },
            ResultAction::CopyUrl => SideEffect::SetClipboard(browse_url(&name.query)?),
        })
    }
}

impl fmt::Display for ResultAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResultAction {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultAction::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NamingError::Config(format!("Unknown action: {}", s)))
    }
}

/// A request for the host to touch the outside world
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    SetClipboard(String),
    OpenBrowser { url: String, private: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::query::{AcronymKind, CasingKind, Query};

    fn name() -> FinalName {
        FinalName {
            label: "getUserId".to_string(),
            query: Query::new("get user id", CasingKind::Camel, AcronymKind::CamelStrict)
                .with_project("7"),
        }
    }

    const URL: &str =
        "https://codic.jp/engine?text=get+user+id&project_id=7&casing=camel&acronym_style=camel+strict";

    #[test]
    fn test_copy_result() {
        assert_eq!(
            ResultAction::CopyResult.resolve(&name()).unwrap(),
            SideEffect::SetClipboard("getUserId".to_string())
        );
    }

    #[test]
    fn test_browse() {
        assert_eq!(
            ResultAction::Browse.resolve(&name()).unwrap(),
            SideEffect::OpenBrowser {
                url: URL.to_string(),
                private: false
            }
        );
    }

    #[test]
    fn test_copy_url() {
        assert_eq!(
            ResultAction::CopyUrl.resolve(&name()).unwrap(),
            SideEffect::SetClipboard(URL.to_string())
        );
    }

    #[test]
    fn test_parse_action_names() {
        assert_eq!("browse_private".parse(), Ok(ResultAction::BrowsePrivate));
        assert_eq!(" COPY_URL ".parse(), Ok(ResultAction::CopyUrl));
        assert!("paste".parse::<ResultAction>().is_err());
        assert_eq!(ResultAction::default(), ResultAction::CopyResult);
    }
}
