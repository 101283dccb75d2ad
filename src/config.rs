//! Generation options.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// How entries are bucketed in the table of contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TocMode {
    /// Group by `@category`.
    Categories,
    /// Group by member path (the default).
    #[default]
    Properties,
}

impl TocMode {
    /// `"categories"` selects category grouping; anything else groups by membership.
    pub fn from_name(name: &str) -> Self {
        match name {
            "categories" => TocMode::Categories,
            _ => TocMode::Properties,
        }
    }
}

/// Permalink fragment style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashStyle {
    /// `member_prototype_name`
    #[default]
    Default,
    /// Lowercased call signature with punctuation stripped.
    Github,
}

impl HashStyle {
    /// `"github"` selects the GitHub style; anything else is the default style.
    pub fn from_name(name: &str) -> Self {
        match name {
            "github" => HashStyle::Github,
            _ => HashStyle::Default,
        }
    }
}

/// Options for [`crate::generate`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Path of the documented source file. Required.
    pub path: Option<PathBuf>,
    /// Base URL for "view in source" links. Required.
    pub url: Option<String>,
    /// Document title; defaults to `<file name> API documentation`.
    pub title: Option<String>,
    /// Fence language for examples.
    pub lang: String,
    /// Sort groups and entries naturally instead of keeping source order.
    pub sort: bool,
    pub toc: TocMode,
    pub style: HashStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            path: None,
            url: None,
            title: None,
            lang: "js".to_string(),
            sort: true,
            toc: TocMode::default(),
            style: HashStyle::default(),
        }
    }
}

impl Options {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Check that the required options are present.
    pub fn validate(&self) -> Result<(&Path, &str), ConfigError> {
        let path = self
            .path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingPath)?;
        let url = self
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        Ok((path, url))
    }

    /// The document title, falling back to the source file name.
    pub fn resolved_title(&self) -> String {
        if let Some(ref title) = self.title {
            return title.clone();
        }
        let name = self
            .path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        format!("{} API documentation", name)
    }
}
