//! Composition profiles
//!
//! The set of pages the shell can render is closed: each `Profile` variant
//! carries its own template, resource lists, logo rule and third-party scripts.

use serde::Serialize;
use thiserror::Error;

use crate::utils::{
    ADMIN_CMS_TEMPLATE, ADMIN_DASHBOARD_TEMPLATE, ADMIN_LOGO, ADMIN_LOGO_LITERAL, ADMIN_SCRIPTS,
    ADMIN_STYLES, CHART_JS_URL, PRIMARY_LOGO, PRIMARY_LOGO_LITERAL, PRIMARY_SCRIPTS,
    PRIMARY_STYLES, PRIMARY_TEMPLATE,
};

/// Administration sub-page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPage {
    #[default]
    Dashboard,
    ContentManagement,
}

/// A page the shell can compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Primary,
    Administration(AdminPage),
}

/// Profile family without the sub-page, as chosen on the selection surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    #[default]
    Primary,
    Administration,
}

/// Replace one literal attribute in the template with an inlined image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSubstitution {
    /// Image path relative to the content root
    pub image: &'static str,
    /// Exact attribute text to replace, e.g. `src="../public/logo.png"`
    pub literal: &'static str,
}

/// Concrete files and rules for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSpec {
    pub template: &'static str,
    pub styles: &'static [&'static str],
    pub scripts: &'static [&'static str],
    pub logo: Option<LogoSubstitution>,
    /// External script URLs injected ahead of the config block
    pub third_party_scripts: &'static [&'static str],
}

impl Profile {
    #[must_use]
    pub fn spec(self) -> ProfileSpec {
        match self {
            Profile::Primary => ProfileSpec {
                template: PRIMARY_TEMPLATE,
                styles: PRIMARY_STYLES,
                scripts: PRIMARY_SCRIPTS,
                logo: Some(LogoSubstitution {
                    image: PRIMARY_LOGO,
                    literal: PRIMARY_LOGO_LITERAL,
                }),
                third_party_scripts: &[],
            },
            Profile::Administration(page) => ProfileSpec {
                template: match page {
                    AdminPage::Dashboard => ADMIN_DASHBOARD_TEMPLATE,
                    AdminPage::ContentManagement => ADMIN_CMS_TEMPLATE,
                },
                styles: ADMIN_STYLES,
                scripts: ADMIN_SCRIPTS,
                logo: Some(LogoSubstitution {
                    image: ADMIN_LOGO,
                    literal: ADMIN_LOGO_LITERAL,
                }),
                third_party_scripts: &[CHART_JS_URL],
            },
        }
    }

    #[must_use]
    pub fn kind(self) -> ProfileKind {
        match self {
            Profile::Primary => ProfileKind::Primary,
            Profile::Administration(_) => ProfileKind::Administration,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Primary => write!(f, "primary"),
            Profile::Administration(page) => write!(f, "admin/{page}"),
        }
    }
}

impl std::fmt::Display for AdminPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminPage::Dashboard => write!(f, "dashboard"),
            AdminPage::ContentManagement => write!(f, "cms"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {what}: '{value}' (expected {expected})")]
pub struct ParseProfileError {
    what: &'static str,
    value: String,
    expected: &'static str,
}

impl std::str::FromStr for ProfileKind {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "src" | "chatbot" => Ok(ProfileKind::Primary),
            "admin" | "administration" => Ok(ProfileKind::Administration),
            _ => Err(ParseProfileError {
                what: "profile",
                value: s.to_string(),
                expected: "primary or admin",
            }),
        }
    }
}

impl std::str::FromStr for AdminPage {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(AdminPage::Dashboard),
            "cms" | "content-management" | "content_management" => {
                Ok(AdminPage::ContentManagement)
            }
            _ => Err(ParseProfileError {
                what: "admin page",
                value: s.to_string(),
                expected: "dashboard or cms",
            }),
        }
    }
}
