use super::{DashboardLayout, StatCard};
use crate::format_helpers::{format_age_range, format_deadline};
use dioxus::prelude::*;
use shared_types::{sample_jobs, total_applications, Dashboard, Identity, JobPosting};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

/// Postings ordered for review: most applications first, ties broken by
/// the earlier deadline.
fn review_queue(mut jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    jobs.sort_by(|a, b| {
        b.applications
            .cmp(&a.applications)
            .then(a.deadline.cmp(&b.deadline))
    });
    jobs
}

/// Admin landing view: every posting with its applicant count, busiest
/// first, ready for shortlisting.
#[component]
pub fn AdminDashboard(identity: Identity, on_logout: EventHandler<()>) -> Element {
    let jobs = review_queue(sample_jobs());
    let posting_count = jobs.len();
    let applications = total_applications(&jobs);

    rsx! {
        DashboardLayout {
            title: Dashboard::Admin.title(),
            identity,
            on_logout,
            div { class: "dashboard-stats",
                StatCard { label: "Total Casting", value: posting_count.to_string() }
                StatCard { label: "Total Lamaran", value: applications.to_string() }
            }

            Card {
                CardHeader {
                    CardTitle { "Antrian Shortlist" }
                }
                CardContent {
                    table { class: "dashboard-table",
                        thead {
                            tr {
                                th { "Casting" }
                                th { "Client" }
                                th { "Kriteria" }
                                th { "Deadline" }
                                th { "Pelamar" }
                            }
                        }
                        tbody {
                            for job in jobs {
                                tr { key: "{job.id}",
                                    td {
                                        span { class: "dashboard-list-title", "{job.title}" }
                                        Badge { variant: BadgeVariant::Outline, "{job.category}" }
                                    }
                                    td { "{job.client}" }
                                    td {
                                        {job.gender.as_str()}
                                        " • "
                                        {format_age_range(&job.age_range)}
                                    }
                                    td { {format_deadline(job.deadline)} }
                                    td { "{job.applications}" }
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
    use pretty_assertions::assert_eq;

    #[test]
    fn review_queue_orders_by_applications() {
        let ids: Vec<String> = review_queue(sample_jobs()).into_iter().map(|j| j.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn review_queue_breaks_ties_by_deadline() {
        let mut jobs = sample_jobs();
        for job in &mut jobs {
            job.applications = 10;
        }
        let ids: Vec<String> = review_queue(jobs).into_iter().map(|j| j.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn renders_shortlist_table() {
        fn app() -> Element {
            let identity = Identity::new("a-1", "Admin Morelux", "admin@morelux.id", "admin");
            rsx! {
                AdminDashboard { identity, on_logout: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Antrian Shortlist"));
        assert!(html.contains("Jakarta Fashion Week"));
        assert!(html.contains("10/1/2024"));
    }
}
