pub mod admin;
pub mod client;
pub mod talent;

pub use admin::AdminDashboard;
pub use client::ClientDashboard;
pub use talent::TalentDashboard;

use crate::format_helpers::initials_from_name;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdStar};
use dioxus_free_icons::Icon;
use shared_types::Identity;
use shared_ui::{
    Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
};

/// Frame shared by the three role dashboards: brand bar, the signed-in
/// identity, a logout button, and the page body.
#[component]
fn DashboardLayout(
    title: String,
    identity: Identity,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let initials = initials_from_name(&identity.name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            header { class: "dashboard-header",
                div { class: "dashboard-brand",
                    Icon::<LdStar> { icon: LdStar, width: 24, height: 24 }
                    h1 { class: "dashboard-title", "{title}" }
                }
                div { class: "dashboard-user",
                    Avatar { src: identity.avatar.clone(), initials }
                    div { class: "dashboard-user-text",
                        span { class: "dashboard-user-name", "{identity.name}" }
                        span { class: "dashboard-user-email", "{identity.email}" }
                    }
                    Badge { variant: BadgeVariant::Outline, "{identity.role}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_logout.call(()),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Keluar"
                    }
                }
            }
            main { class: "dashboard-body", {children} }
        }
    }
}

/// Single headline number.
#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        Card { class: "dashboard-stat",
            CardHeader {
                CardTitle { class: "dashboard-stat-label", "{label}" }
            }
            CardContent {
                p { class: "dashboard-stat-value", "{value}" }
            }
        }
    }
}
