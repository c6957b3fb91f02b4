use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ShellError;
use crate::models::Identity;

/// Top-level screens the shell can be on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Login,
    Dashboard,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Login => "login",
            View::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is signed in and which screen is active.
///
/// The fields are private: `login`, `logout` and `navigate` are the only
/// mutators, which keeps `Dashboard` reachable only with an identity set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    identity: Option<Identity>,
    view: View,
}

impl Session {
    /// A fresh session: nobody signed in, landing page showing.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(identity: Option<Identity>, view: View) -> Self {
        Self { identity, view }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Accept an identity from the login collaborator and open its dashboard.
    pub fn login(&mut self, identity: Identity) {
        tracing::info!(
            user_id = %identity.id,
            role = %identity.role,
            from = %self.view,
            "Signed in"
        );
        if let Err(err) = identity.role() {
            tracing::error!(user_id = %identity.id, error = %err, "No dashboard for role");
        }
        self.identity = Some(identity);
        self.view = View::Dashboard;
    }

    /// Drop the identity and return to the landing page. Idempotent.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(user_id = %identity.id, "Signed out");
        }
        self.view = View::Landing;
    }

    /// Move between the landing page and the login screen.
    ///
    /// The dashboard is only reachable through [`Session::login`], and a
    /// dashboard is only left through [`Session::logout`]. Rejected moves
    /// leave the session untouched.
    pub fn navigate(&mut self, to: View) -> Result<(), ShellError> {
        let from = self.view;
        match (from, to) {
            (View::Landing | View::Login, View::Landing | View::Login) => {
                if from != to {
                    tracing::info!(%from, %to, "Navigated");
                }
                self.view = to;
                Ok(())
            }
            _ => {
                tracing::warn!(
                    %from,
                    %to,
                    authenticated = self.is_authenticated(),
                    "Rejected view transition"
                );
                Err(ShellError::invalid_transition(from, to))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{route, Screen};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn identity(role: &str) -> Identity {
        Identity::new("u-1", "Dewi Lestari", "dewi@example.com", role)
    }

    #[test]
    fn new_session_is_anonymous_on_landing() {
        let session = Session::new();
        assert_eq!(session.view(), View::Landing);
        assert!(session.identity().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_stores_identity_and_opens_dashboard() {
        for role in ["client", "talent", "admin"] {
            let mut session = Session::new();
            session.login(identity(role));
            assert_eq!(session.view(), View::Dashboard);
            assert_eq!(session.identity(), Some(&identity(role)));
        }
    }

    #[test]
    fn logout_resets_from_any_state() {
        let mut from_dashboard = Session::new();
        from_dashboard.login(identity("talent"));
        from_dashboard.logout();
        assert_eq!(from_dashboard, Session::new());

        let mut from_login = Session::new();
        from_login.navigate(View::Login).unwrap();
        from_login.logout();
        assert_eq!(from_login, Session::new());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut once = Session::new();
        once.login(identity("client"));
        once.logout();

        let mut twice = once.clone();
        twice.logout();

        assert_eq!(once, twice);
        assert_eq!(twice.view(), View::Landing);
        assert!(twice.identity().is_none());
    }

    #[test]
    fn navigate_between_landing_and_login() {
        let mut session = Session::new();
        session.navigate(View::Login).unwrap();
        assert_eq!(session.view(), View::Login);
        session.navigate(View::Landing).unwrap();
        assert_eq!(session.view(), View::Landing);
    }

    #[test]
    fn navigate_to_same_view_is_noop() {
        let mut session = Session::new();
        session.navigate(View::Landing).unwrap();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn navigate_to_dashboard_without_identity_is_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.navigate(View::Dashboard),
            Err(ShellError::invalid_transition(View::Landing, View::Dashboard))
        );
        assert_eq!(session.view(), View::Landing);

        session.navigate(View::Login).unwrap();
        assert_eq!(
            session.navigate(View::Dashboard),
            Err(ShellError::invalid_transition(View::Login, View::Dashboard))
        );
        assert_eq!(session.view(), View::Login);
    }

    #[test]
    fn navigate_out_of_dashboard_requires_logout() {
        let mut session = Session::new();
        session.login(identity("admin"));
        let before = session.clone();

        assert!(session.navigate(View::Landing).is_err());
        assert!(session.navigate(View::Login).is_err());
        assert!(session.navigate(View::Dashboard).is_err());
        assert_eq!(session, before);
    }

    /// Counts ERROR events seen while installed as the default subscriber.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn unknown_role_is_logged_once_per_login() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let mut session = Session::new();
            session.login(identity("moderator"));
            for _ in 0..3 {
                assert!(matches!(route(&session), Screen::UnknownRole(_)));
            }
        });

        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn known_role_login_logs_no_error() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let mut session = Session::new();
            session.login(identity("talent"));
            route(&session);
        });

        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn view_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&View::Dashboard).unwrap(), "\"dashboard\"");
        assert_eq!(View::Login.to_string(), "login");
    }
}
