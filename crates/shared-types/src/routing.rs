use crate::error::ShellError;
use crate::models::{Identity, Role};
use crate::session::{Session, View};

/// Role-specific dashboards an authenticated identity can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dashboard {
    Client,
    Talent,
    Admin,
}

impl Dashboard {
    pub fn title(&self) -> &'static str {
        match self {
            Dashboard::Client => "Client Dashboard",
            Dashboard::Talent => "Talent Dashboard",
            Dashboard::Admin => "Admin Dashboard",
        }
    }
}

impl From<Role> for Dashboard {
    fn from(role: Role) -> Self {
        match role {
            Role::Client => Dashboard::Client,
            Role::Talent => Dashboard::Talent,
            Role::Admin => Dashboard::Admin,
        }
    }
}

/// The one screen the shell renders for a given session.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    Login,
    /// A role dashboard together with the identity it is rendered for.
    Dashboard(Dashboard, Identity),
    /// The signed-in identity carries a role with no dashboard.
    UnknownRole(ShellError),
}

/// Pick the dashboard for an identity's role.
pub fn dispatch(identity: &Identity) -> Result<Dashboard, ShellError> {
    let role = identity.role()?;
    Ok(Dashboard::from(role))
}

/// Map the session to a screen. Every session maps to exactly one screen.
///
/// Runs on every render, so an unknown role is not logged here;
/// [`Session::login`] reports it once.
pub fn route(session: &Session) -> Screen {
    match (session.view(), session.identity()) {
        (View::Login, _) => Screen::Login,
        (View::Dashboard, Some(identity)) => match dispatch(identity) {
            Ok(dashboard) => Screen::Dashboard(dashboard, identity.clone()),
            Err(err) => Screen::UnknownRole(err),
        },
        (View::Dashboard, None) => {
            tracing::error!("Dashboard view without an identity, falling back to landing");
            Screen::Landing
        }
        (View::Landing, _) => Screen::Landing,
    }
}
