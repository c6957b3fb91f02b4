use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdShieldAlert};
use dioxus_free_icons::Icon;
use shared_types::ShellError;
use shared_ui::{Button, ButtonVariant};

/// Shown when the signed-in identity carries a role with no dashboard.
/// The only way out is logging out.
#[component]
pub fn UnknownRoleScreen(error: ShellError, on_logout: EventHandler<()>) -> Element {
    let detail = error.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./unknown_role.css") }

        div { class: "unknown-role-page",
            div { class: "unknown-role-card",
                div { class: "unknown-role-icon",
                    Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 40, height: 40 }
                }
                h1 { class: "unknown-role-title", "Dashboard Tidak Tersedia" }
                p { class: "unknown-role-message", {error.friendly_message()} }
                code { class: "unknown-role-detail", "{detail}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_logout.call(()),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Keluar"
                }
            }
        }
    }
}
