pub mod dashboard;
pub mod landing;
pub mod login;
pub mod unknown_role;

use dioxus::prelude::*;
use shared_types::{featured_jobs, route, AppConfig, Dashboard, Screen, Session, View};

use dashboard::{AdminDashboard, ClientDashboard, TalentDashboard};
use landing::LandingPage;
use login::LoginForm;
use unknown_role::UnknownRoleScreen;

/// Move the session between the public views. A rejected move keeps the
/// current screen.
fn go_to(mut session: Signal<Session>, to: View) {
    if let Err(err) = session.write().navigate(to) {
        tracing::debug!(error = %err, "Ignoring navigation request");
    }
}

/// Top-level shell: renders exactly one screen for the current session and
/// wires each screen's callbacks back into the session.
#[component]
pub fn Shell(session: Signal<Session>) -> Element {
    let mut session = session;
    let config = use_context::<AppConfig>();
    let screen = route(&session.read());
    let on_logout = move |_: ()| session.write().logout();

    match screen {
        Screen::Landing => rsx! {
            LandingPage {
                brand_name: config.landing.brand_name.clone(),
                jobs: featured_jobs(config.landing.featured_jobs),
                on_sign_in: move |_| go_to(session, View::Login),
            }
        },
        Screen::Login => rsx! {
            LoginForm {
                on_login: move |identity| session.write().login(identity),
                on_back: move |_| go_to(session, View::Landing),
            }
        },
        Screen::Dashboard(Dashboard::Client, identity) => rsx! {
            ClientDashboard { identity, on_logout }
        },
        Screen::Dashboard(Dashboard::Talent, identity) => rsx! {
            TalentDashboard { identity, on_logout }
        },
        Screen::Dashboard(Dashboard::Admin, identity) => rsx! {
            AdminDashboard { identity, on_logout }
        },
        Screen::UnknownRole(error) => rsx! {
            UnknownRoleScreen { error, on_logout }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use shared_types::Identity;

    fn signed_in(role: &str) -> Session {
        let mut session = Session::new();
        session.login(Identity::new("u-1", "Dewi Lestari", "dewi@example.com", role));
        session
    }

    #[test]
    fn anonymous_session_shows_landing_page() {
        fn app() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(Session::new);
            rsx! { Shell { session } }
        }
        let html = render(app);
        assert!(html.contains("Morelux Agency"));
        assert!(html.contains("Casting Terbaru"));
        assert!(!html.contains("Masuk ke Akun Anda"));
    }

    #[test]
    fn configured_brand_and_job_count_reach_landing_page() {
        fn app() -> Element {
            use_context_provider(|| {
                let mut config = AppConfig::default();
                config.landing.brand_name = "Studio Nusantara".to_string();
                config.landing.featured_jobs = 1;
                config
            });
            let session = use_signal(Session::new);
            rsx! { Shell { session } }
        }
        let html = render(app);
        assert!(html.contains("Studio Nusantara"));
        assert!(html.contains("Commercial Model untuk Produk Skincare"));
        assert!(!html.contains("Talent untuk Iklan Makanan"));
    }

    #[test]
    fn login_view_shows_form() {
        fn app() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(|| {
                let mut session = Session::new();
                let _ = session.navigate(View::Login);
                session
            });
            rsx! { Shell { session } }
        }
        let html = render(app);
        assert!(html.contains("Masuk ke Akun Anda"));
        assert!(!html.contains("Casting Terbaru"));
    }

    #[test]
    fn talent_lands_on_talent_dashboard() {
        fn app() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(|| signed_in("talent"));
            rsx! { Shell { session } }
        }
        let html = render(app);
        assert!(html.contains("Talent Dashboard"));
        assert!(html.contains("Dewi Lestari"));
    }

    #[test]
    fn client_and_admin_get_their_dashboards() {
        fn client() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(|| signed_in("client"));
            rsx! { Shell { session } }
        }
        fn admin() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(|| signed_in("admin"));
            rsx! { Shell { session } }
        }
        assert!(render(client).contains("Client Dashboard"));
        assert!(render(admin).contains("Admin Dashboard"));
    }

    #[test]
    fn non_canonical_role_shows_error_screen() {
        fn app() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(|| signed_in("ADMIN"));
            rsx! { Shell { session } }
        }
        let html = render(app);
        assert!(html.contains("Dashboard Tidak Tersedia"));
        assert!(!html.contains("Admin Dashboard"));
    }

    #[test]
    fn unknown_role_shows_error_screen() {
        fn app() -> Element {
            use_context_provider(AppConfig::default);
            let session = use_signal(|| signed_in("superuser"));
            rsx! { Shell { session } }
        }
        let html = render(app);
        assert!(html.contains("Dashboard Tidak Tersedia"));
        assert!(html.contains("superuser"));
        assert!(!html.contains("Talent Dashboard"));
        assert!(!html.contains("Client Dashboard"));
        assert!(!html.contains("Admin Dashboard"));
    }
}
