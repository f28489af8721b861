//! Site content consumed read-only by the terminal.
//!
//! Loading and parsing belong to the caller; these types only describe the
//! object tree. Every collection is optional in the source data, so all
//! fields fall back to their defaults.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::{DEFAULT_HOME, DEFAULT_HOSTNAME, DEFAULT_USER};

/// Mapping from absolute directory path to its ordered child names.
pub type FilesystemTree = HashMap<String, Vec<String>>;

/// Top-level content object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub terminal: TerminalData,
    /// About paragraphs (may contain inline HTML).
    pub about: Vec<String>,
    pub social: Vec<Social>,
    pub projects: Vec<Project>,
    pub research: Vec<Research>,
    pub skills: Skills,
}

impl SiteContent {
    /// Content used when the data files cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            about: vec!["Data loading failed. Please refresh.".to_string()],
            ..Self::default()
        }
    }

    /// Find a social entry by platform name.
    pub fn social(&self, platform: &str) -> Option<&Social> {
        self.social.iter().find(|s| s.platform == platform)
    }
}

/// `terminal` section of the content.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TerminalData {
    pub filesystem: FilesystemTree,
    /// Message of the day, printed verbatim at session start.
    pub motd: Vec<String>,
    pub user: String,
    pub hostname: String,
    pub home: String,
}

impl Default for TerminalData {
    fn default() -> Self {
        Self {
            filesystem: FilesystemTree::new(),
            motd: Vec::new(),
            user: DEFAULT_USER.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            home: DEFAULT_HOME.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Social {
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub class: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub start_date: Option<String>,
    /// `None` means the project is ongoing.
    pub end_date: Option<String>,
    pub url: String,
    pub demo: Option<String>,
    pub tech: Vec<String>,
    pub category: Vec<String>,
    pub icon: String,
    pub is_highlight: bool,
    #[serde(rename = "isHPC")]
    pub is_hpc: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Research {
    pub title: String,
    pub venue: String,
    pub date: Option<String>,
    pub link: Option<String>,
    pub keywords: Vec<String>,
    pub is_highlight: bool,
    #[serde(rename = "isHPC")]
    pub is_hpc: bool,
}

/// Skill groups; absent groups are skipped by `skills`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub languages: Option<Vec<String>>,
    pub frameworks: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
    pub concepts: Option<Vec<String>>,
}

impl Skills {
    /// Present groups with their display labels, in fixed order.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Languages", &self.languages),
            ("Frameworks", &self.frameworks),
            ("Tools", &self.tools),
            ("Concepts", &self.concepts),
        ]
        .into_iter()
        .filter_map(|(label, group)| group.as_deref().map(|items| (label, items)))
        .collect()
    }
}
