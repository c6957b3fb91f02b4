use super::{DashboardLayout, StatCard};
use crate::components::job_card::JobCard;
use dioxus::prelude::*;
use shared_types::{sample_jobs, Dashboard, Identity};
use std::collections::BTreeSet;

/// Talent landing view: open casting calls with an apply button.
///
/// Applications are kept in component state only and are gone after
/// logout.
#[component]
pub fn TalentDashboard(identity: Identity, on_logout: EventHandler<()>) -> Element {
    let mut applied = use_signal(BTreeSet::<String>::new);
    let jobs = sample_jobs();
    let open_count = jobs.len();
    let applied_count = applied.read().len();
    let cards: Vec<_> = jobs
        .into_iter()
        .map(|job| {
            let label = if applied.read().contains(&job.id) {
                "Lamaran Terkirim"
            } else {
                "Lamar Sekarang"
            };
            let job_id = job.id.clone();
            (job, job_id, label)
        })
        .collect();

    rsx! {
        DashboardLayout {
            title: Dashboard::Talent.title(),
            identity: identity.clone(),
            on_logout,
            p { class: "dashboard-welcome",
                "Halo {identity.name}, temukan casting yang cocok untuk Anda."
            }

            div { class: "dashboard-stats",
                StatCard { label: "Casting Terbuka", value: open_count.to_string() }
                StatCard { label: "Lamaran Terkirim", value: applied_count.to_string() }
            }

            div { class: "dashboard-job-grid",
                for (job, job_id, label) in cards {
                    JobCard {
                        key: "{job.id}",
                        job: job.clone(),
                        action_label: label,
                        on_select: move |_| {
                            if applied.write().insert(job_id.clone()) {
                                tracing::debug!(job_id = %job_id, "Applied to casting");
                            }
                        },
                    }
                }
            }
        }
    }
}
