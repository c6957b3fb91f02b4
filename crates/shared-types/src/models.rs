use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ShellError;

/// Marketplace role controlling which dashboard an identity lands on.
///
/// - `Client`: posts casting calls and reviews applicants.
/// - `Talent`: maintains a profile and applies to casting calls.
/// - `Admin`: curates postings and shortlists candidates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Talent,
    Admin,
}

/// All roles in the order they are offered on the login form.
pub const ALL_ROLES: &[Role] = &[Role::Client, Role::Talent, Role::Admin];

impl Role {
    /// Parse a raw role string. Only the exact lowercase names match;
    /// anything else, including other casings or padding, is an
    /// [`ShellError::UnknownRole`].
    pub fn parse(s: &str) -> Result<Self, ShellError> {
        match s {
            "client" => Ok(Role::Client),
            "talent" => Ok(Role::Talent),
            "admin" => Ok(Role::Admin),
            _ => Err(ShellError::unknown_role(s)),
        }
    }

    /// Lowercase string as carried by [`Identity::role`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Talent => "talent",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label for the login form and dashboard headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Talent => "Talent",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated actor, as handed over by the login collaborator.
///
/// `role` keeps the raw string the collaborator produced. It is only
/// interpreted when the shell dispatches to a dashboard, so a bad value
/// surfaces as an error screen instead of being lost at login time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// The parsed role, or `UnknownRole` for values outside the closed set.
    pub fn role(&self) -> Result<Role, ShellError> {
        Role::parse(&self.role)
    }
}
