use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::View;

/// Errors raised by the application shell.
///
/// Neither variant is fatal. An invalid transition is rejected and the
/// session keeps its current view; an unknown role is rendered as an
/// explicit error screen.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShellError {
    /// A view change that the session state machine does not allow.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: View, to: View },

    /// A role string outside the client/talent/admin set.
    #[error("unknown role '{role}'")]
    UnknownRole { role: String },
}

impl ShellError {
    pub fn invalid_transition(from: View, to: View) -> Self {
        Self::InvalidTransition { from, to }
    }

    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole { role: role.into() }
    }

    /// Message shown to the end user when the error reaches the screen.
    pub fn friendly_message(&self) -> String {
        match self {
            ShellError::InvalidTransition { .. } => {
                "Halaman tersebut tidak dapat dibuka saat ini.".to_string()
            }
            ShellError::UnknownRole { role } if role.trim().is_empty() => {
                "Akun Anda belum memiliki peran.".to_string()
            }
            ShellError::UnknownRole { role } => {
                format!("Peran \"{role}\" tidak dikenali. Tidak ada dashboard untuk akun ini.")
            }
        }
    }
}
