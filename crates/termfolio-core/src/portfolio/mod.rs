//! Portfolio data tables.
//!
//! The built-in portfolio is embedded at compile time from `portfolio.toml`.
//! A user can replace it with their own file via `portfolio_file` in the
//! config (or `--portfolio` on the command line).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_PORTFOLIO: &str = include_str!("portfolio.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personnel {
    pub name: String,
    pub designation: String,
    pub status: String,
    pub location: String,
    pub clearance: String,
    #[serde(default)]
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Recipient address used by the contact form.
    pub recipient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub status: String,
    pub tech: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    /// Trimmed display name.
    pub fn title(&self) -> &str {
        self.name.trim()
    }

    /// Returns the link only when it is something a browser can open.
    pub fn url(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| link.starts_with("http://") || link.starts_with("https://"))
    }

    /// Case-insensitive match against name, tech and description.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.tech.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecord {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommLink {
    pub label: String,
    pub url: String,
    pub kind: String,
    /// When set, activating the link copies this text instead of opening it.
    #[serde(default)]
    pub copyable: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub program: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Startup {
    pub name: String,
    pub role: String,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub event: String,
}

/// All static data the command resolver reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub personnel: Personnel,
    pub contact: Contact,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub records: Vec<WorkRecord>,
    #[serde(default)]
    pub comms: Vec<CommLink>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub college: Vec<Education>,
    #[serde(default)]
    pub startups: Vec<Startup>,
    #[serde(default)]
    pub now: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Portfolio {
    /// Parses the portfolio embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_PORTFOLIO).context("Failed to parse built-in portfolio")
    }

    /// Loads a portfolio from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio from {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse portfolio from {}", path.display()))
    }

    /// Loads `path` when given, the built-in portfolio otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    /// Returns the raw TOML of the built-in portfolio (for `portfolio export`).
    pub fn builtin_source() -> &'static str {
        BUILTIN_PORTFOLIO
    }

    fn parse(contents: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(contents)?;
        Ok(portfolio)
    }
}
