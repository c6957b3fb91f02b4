use super::{DashboardLayout, StatCard};
use crate::format_helpers::format_deadline;
use dioxus::prelude::*;
use shared_types::{sample_jobs, total_applications, Dashboard, Identity};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

/// Client landing view: the client's casting calls and how many talents
/// applied to each.
#[component]
pub fn ClientDashboard(identity: Identity, on_logout: EventHandler<()>) -> Element {
    let jobs = sample_jobs();
    let active = jobs.len();
    let applications = total_applications(&jobs);

    rsx! {
        DashboardLayout {
            title: Dashboard::Client.title(),
            identity: identity.clone(),
            on_logout,
            p { class: "dashboard-welcome",
                "Selamat datang, {identity.name}. Pantau casting Anda di sini."
            }

            div { class: "dashboard-stats",
                StatCard { label: "Casting Aktif", value: active.to_string() }
                StatCard { label: "Total Lamaran", value: applications.to_string() }
            }

            Card {
                CardHeader {
                    CardTitle { "Casting Saya" }
                }
                CardContent {
                    ul { class: "dashboard-list",
                        for job in jobs {
                            li { key: "{job.id}", class: "dashboard-list-item",
                                div {
                                    p { class: "dashboard-list-title", "{job.title}" }
                                    p { class: "dashboard-list-meta",
                                        "{job.location} • Deadline: "
                                        {format_deadline(job.deadline)}
                                    }
                                }
                                Badge { variant: BadgeVariant::Secondary,
                                    "{job.applications} pelamar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn shows_postings_and_totals() {
        fn app() -> Element {
            let identity = Identity::new("c-1", "Rina Wijaya", "rina@brand.id", "client");
            rsx! {
                ClientDashboard { identity, on_logout: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("Client Dashboard"));
        assert!(html.contains("Rina Wijaya"));
        assert!(html.contains("Casting Saya"));
        assert!(html.contains("42 pelamar"));
        assert!(html.contains("85"));
        assert!(html.contains("Keluar"));
    }
}
