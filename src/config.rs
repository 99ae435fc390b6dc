//! Immutable dashboard configuration.
//!
//! The configuration is loaded from a YAML file at startup and passed into
//! the core explicitly; nothing in the pipeline reads global state. It
//! describes which saved searches feed which named bug list, grouped into
//! categories.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::SearchSpec;

/// A column of a rendered bug list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Assignee login or email.
    Assignee,
    /// Issue title.
    Title,
    /// Project (repository or component).
    Project,
    /// Whiteboard tags.
    Whiteboard,
    /// Story points.
    Points,
    /// Numeric priority.
    Priority,
    /// Last-change timestamp.
    LastChangeDate,
}

impl Column {
    /// Header label for the column.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Assignee => "assignee",
            Self::Title => "title",
            Self::Project => "project",
            Self::Whiteboard => "whiteboard",
            Self::Points => "points",
            Self::Priority => "priority",
            Self::LastChangeDate => "last change",
        }
    }
}

/// Sort order of a rendered bug list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// By assignee, unassigned issues last.
    #[default]
    Assignee,
    /// By last-change timestamp, newest first.
    LastChangeDate,
}

/// One named bug list: its columns and the searches feeding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BugList {
    /// Display name of the list.
    pub name: String,
    /// Columns to render, in order.
    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,
    /// Sort order of the rendered list.
    #[serde(default)]
    pub sort: SortColumn,
    /// Searches whose joined results make up the list.
    pub searches: Vec<SearchSpec>,
}

fn default_columns() -> Vec<Column> {
    vec![Column::Assignee, Column::Title, Column::Whiteboard]
}

/// A navigation category grouping several bug lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, e.g. `"active"` or `"p3"`.
    pub name: String,
    /// Bug lists shown for this category, in order.
    pub lists: Vec<BugList>,
}

/// The full dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Categories in navigation order.
    pub categories: Vec<Category>,
}

impl DashboardConfig {
    /// Loads and validates a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or
    /// if the parsed configuration violates a structural rule.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the structural rules a usable configuration must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid("no categories defined".to_string()));
        }

        let mut names = HashSet::new();
        for category in &self.categories {
            if !names.insert(category.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate category name: {}",
                    category.name
                )));
            }
            if category.lists.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "category {} has no bug lists",
                    category.name
                )));
            }
            for list in &category.lists {
                if list.searches.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "bug list {} in category {} has no searches",
                        list.name, category.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}
