use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who a casting call is looking for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TargetGender {
    Female,
    Male,
    #[default]
    Any,
}

impl TargetGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetGender::Female => "Female",
            TargetGender::Male => "Male",
            TargetGender::Any => "Any",
        }
    }
}

/// A casting call shown on the landing page and dashboards.
///
/// Read-only sample data; nothing in the shell creates or edits postings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub client: String,
    pub category: String,
    pub age_range: String,
    pub gender: TargetGender,
    pub location: String,
    pub deadline: NaiveDate,
    pub applications: u32,
    pub description: String,
    pub requirements: Vec<String>,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date"),
    }
}

const SKINCARE_DEADLINE: NaiveDate = date(2024, 1, 15);
const FOOD_TVC_DEADLINE: NaiveDate = date(2024, 1, 20);
const FASHION_SHOW_DEADLINE: NaiveDate = date(2024, 1, 10);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The sample casting calls, newest first.
pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "1".into(),
            title: "Commercial Model untuk Produk Skincare".into(),
            client: "Beauty Brand Indonesia".into(),
            category: "Commercial".into(),
            age_range: "20-30".into(),
            gender: TargetGender::Female,
            location: "Jakarta".into(),
            deadline: SKINCARE_DEADLINE,
            applications: 25,
            description: "Mencari model wanita untuk kampanye produk skincare premium. \
                          Harus memiliki kulit bersih dan berpengalaman di bidang beauty."
                .into(),
            requirements: strings(&[
                "Tinggi minimal 165cm",
                "Berpengalaman modeling",
                "Kulit bersih",
                "Fotogenic",
            ]),
        },
        JobPosting {
            id: "2".into(),
            title: "Talent untuk Iklan Makanan".into(),
            client: "Food Corp".into(),
            category: "TVC".into(),
            age_range: "25-40".into(),
            gender: TargetGender::Any,
            location: "Bandung".into(),
            deadline: FOOD_TVC_DEADLINE,
            applications: 18,
            description: "Dicari talent untuk iklan televisi produk makanan keluarga. \
                          Harus bisa berakting natural dan menyenangkan."
                .into(),
            requirements: strings(&[
                "Pengalaman acting",
                "Ekspresif",
                "Comfortable dengan makanan",
                "Available untuk shooting 3 hari",
            ]),
        },
        JobPosting {
            id: "3".into(),
            title: "Model Fashion Show".into(),
            client: "Jakarta Fashion Week".into(),
            category: "Fashion".into(),
            age_range: "18-28".into(),
            gender: TargetGender::Any,
            location: "Jakarta".into(),
            deadline: FASHION_SHOW_DEADLINE,
            applications: 42,
            description: "Mencari model profesional untuk fashion show koleksi terbaru \
                          designer lokal dan internasional."
                .into(),
            requirements: strings(&[
                "Tinggi minimal 170cm (pria), 165cm (wanita)",
                "Pengalaman runway",
                "Portfolio lengkap",
                "Available untuk fitting dan show",
            ]),
        },
    ]
}

/// The first `limit` sample postings, for preview sections.
pub fn featured_jobs(limit: usize) -> Vec<JobPosting> {
    sample_jobs().into_iter().take(limit).collect()
}

/// Total applications across a set of postings.
pub fn total_applications(jobs: &[JobPosting]) -> u32 {
    jobs.iter().map(|j| j.applications).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_sample_jobs_in_order() {
        let ids: Vec<String> = sample_jobs().into_iter().map(|j| j.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn every_sample_job_is_fully_populated() {
        for job in sample_jobs() {
            assert!(!job.title.is_empty());
            assert!(!job.client.is_empty());
            assert!(!job.description.contains("  "), "{}", job.description);
            assert_eq!(job.requirements.len(), 4);
        }
    }

    #[test]
    fn featured_jobs_respects_limit() {
        assert_eq!(featured_jobs(2).len(), 2);
        assert_eq!(featured_jobs(3), sample_jobs());
        assert_eq!(featured_jobs(10).len(), 3);
        assert!(featured_jobs(0).is_empty());
    }

    #[test]
    fn total_applications_sums_counts() {
        assert_eq!(total_applications(&sample_jobs()), 85);
        assert_eq!(total_applications(&[]), 0);
    }

    #[test]
    fn job_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(&sample_jobs()[0]).unwrap();
        assert_eq!(json["ageRange"], "20-30");
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["deadline"], "2024-01-15");
        assert_eq!(json["requirements"][3], "Fotogenic");
    }

    #[test]
    fn job_deserializes_from_camel_case_record() {
        let job: JobPosting = serde_json::from_str(
            r#"{
                "id": "9",
                "title": "Voice Over",
                "client": "Studio Suara",
                "category": "Audio",
                "ageRange": "20-45",
                "gender": "Male",
                "location": "Surabaya",
                "deadline": "2024-02-01",
                "applications": 3,
                "description": "Pengisi suara iklan radio.",
                "requirements": ["Suara berat"]
            }"#,
        )
        .unwrap();
        assert_eq!(job.gender, TargetGender::Male);
        assert_eq!(job.deadline, date(2024, 2, 1));
    }
}
