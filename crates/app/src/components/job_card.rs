use crate::format_helpers::{format_age_range, format_deadline};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdMapPin, LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::JobPosting;
use shared_ui::{Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle};

/// Preview card for a casting call.
///
/// The action button label varies by screen; on the landing page it sends
/// anonymous visitors to the login screen.
#[component]
pub fn JobCard(
    job: JobPosting,
    #[props(default = "Lihat Detail".to_string())] action_label: String,
    on_select: EventHandler<()>,
) -> Element {
    let deadline = format_deadline(job.deadline);
    let audience = format!("{} • {}", job.gender.as_str(), format_age_range(&job.age_range));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./job_card.css") }

        Card { interactive: true, class: "job-card",
            CardHeader {
                div { class: "job-card-meta",
                    Badge { variant: BadgeVariant::Secondary, "{job.category}" }
                    span { class: "job-card-applications",
                        Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        "{job.applications}"
                    }
                }
                CardTitle { class: "job-card-title", "{job.title}" }
                p { class: "job-card-client", "{job.client}" }
            }
            CardContent {
                ul { class: "job-card-facts",
                    li {
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        "{audience}"
                    }
                    li {
                        Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                        "{job.location}"
                    }
                    li {
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        "Deadline: {deadline}"
                    }
                }
                p { class: "job-card-description", "{job.description}" }
                Button {
                    full_width: true,
                    onclick: move |_| on_select.call(()),
                    "{action_label}"
                }
            }
        }
    }
}
