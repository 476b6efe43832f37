//! Verbs and the actions each verb exposes.
//!
//! Every [`Action`] belongs to exactly one [`Verb`]. Selecting the handler for a
//! request is a lookup in the verb's action list, falling back to the verb's
//! default action when the envelope names none.

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Request verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    /// The action used when the envelope does not name one.
    pub fn default_action(&self) -> Action {
        match self {
            Verb::Get => Action::Read,
            Verb::Post => Action::Create,
            Verb::Put => Action::Update,
            Verb::Delete => Action::Destroy,
        }
    }

    /// Every action reachable through this verb.
    pub fn actions(&self) -> &'static [Action] {
        match self {
            Verb::Get => &[
                Action::Read,
                Action::Alias,
                Action::Search,
                Action::Inspect,
                Action::Download,
            ],
            Verb::Post => &[Action::Create, Action::Bulk, Action::Copy],
            Verb::Put => &[Action::Update, Action::Move, Action::Rename],
            Verb::Delete => &[Action::Destroy],
        }
    }

    /// Selects the action for a request.
    ///
    /// An absent or empty name selects [`Verb::default_action`].
    ///
    /// # Errors
    ///
    /// `INVALID_ACTION` when the name is not one of this verb's actions.
    pub fn resolve(&self, name: Option<&str>) -> Result<Action, ErrorCode> {
        match name {
            None | Some("") => Ok(self.default_action()),
            Some(name) => self
                .actions()
                .iter()
                .copied()
                .find(|action| action.as_str() == name)
                .ok_or(ErrorCode::InvalidAction),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(ErrorCode::InvalidAction),
        }
    }
}

/// A routable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Alias,
    Search,
    Inspect,
    Download,
    Create,
    Bulk,
    Copy,
    Update,
    Move,
    Rename,
    Destroy,
}

impl Action {
    /// The action name as it appears in envelopes and permission checks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Alias => "alias",
            Action::Search => "search",
            Action::Inspect => "inspect",
            Action::Download => "download",
            Action::Create => "create",
            Action::Bulk => "bulk",
            Action::Copy => "copy",
            Action::Update => "update",
            Action::Move => "move",
            Action::Rename => "rename",
            Action::Destroy => "destroy",
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            Action::Read | Action::Alias | Action::Search | Action::Inspect | Action::Download => {
                Verb::Get
            }
            Action::Create | Action::Bulk | Action::Copy => Verb::Post,
            Action::Update | Action::Move | Action::Rename => Verb::Put,
            Action::Destroy => Verb::Delete,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
