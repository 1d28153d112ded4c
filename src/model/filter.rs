use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Which tasks are eligible for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Uncompleted,
}

impl FilterMode {
    /// All modes in button order
    pub const ALL: [FilterMode; 3] = [
        FilterMode::All,
        FilterMode::Completed,
        FilterMode::Uncompleted,
    ];

    /// Whether a task passes this filter
    pub fn admits(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Uncompleted => !task.completed,
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Uncompleted => "Uncompleted",
        }
    }

    /// Next mode in button order, wrapping around
    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Completed => FilterMode::Uncompleted,
            FilterMode::Uncompleted => FilterMode::All,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Uncompleted => "uncompleted",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter mode '{0}' (expected all, completed or uncompleted)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "completed" => Ok(FilterMode::Completed),
            "uncompleted" => Ok(FilterMode::Uncompleted),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}
