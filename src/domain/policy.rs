//! Behavior switches for shortening and redirecting.
//!
//! Both are selected once from configuration and handed to
//! [`crate::application::services::UrlService`].

use std::fmt;
use std::str::FromStr;

/// What to do when the same original URL is shortened twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortenPolicy {
    /// Return the existing record for an identical original URL.
    #[default]
    Deduplicate,
    /// Always mint a fresh code.
    AlwaysNew,
}

/// How a failed click increment affects the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickCounting {
    /// Log the failure and redirect anyway.
    #[default]
    BestEffort,
    /// Fail the redirect.
    Strict,
}

impl FromStr for ShortenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deduplicate" | "dedupe" => Ok(Self::Deduplicate),
            "always_new" | "always-new" => Ok(Self::AlwaysNew),
            other => Err(format!(
                "SHORTEN_POLICY must be 'deduplicate' or 'always_new', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for ShortenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deduplicate => f.write_str("deduplicate"),
            Self::AlwaysNew => f.write_str("always_new"),
        }
    }
}

impl FromStr for ClickCounting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "CLICK_COUNTING must be 'best_effort' or 'strict', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for ClickCounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestEffort => f.write_str("best_effort"),
            Self::Strict => f.write_str("strict"),
        }
    }
}
