use crate::components::job_card::JobCard;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdShield, LdStar, LdUser};
use dioxus_free_icons::Icon;
use shared_types::JobPosting;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1733222814757-c80516c183d3?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Marketing landing page. Every call to action asks the shell to open
/// the login screen through `on_sign_in`.
#[component]
pub fn LandingPage(
    brand_name: String,
    jobs: Vec<JobPosting>,
    on_sign_in: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            header { class: "landing-header",
                div { class: "landing-container landing-header-row",
                    div { class: "landing-brand",
                        Icon::<LdStar> { icon: LdStar, width: 32, height: 32 }
                        h1 { class: "landing-brand-name", "{brand_name}" }
                    }
                    Button { onclick: move |_| on_sign_in.call(()), "Masuk / Daftar" }
                }
            }

            HeroSection { on_sign_in }
            FeatureSection {}

            section { class: "landing-section landing-jobs",
                div { class: "landing-container",
                    div { class: "landing-section-heading",
                        h3 { "Casting Terbaru" }
                        p { "Peluang casting terbaru untuk talent profesional" }
                    }
                    if jobs.is_empty() {
                        p { class: "landing-jobs-empty", "Belum ada casting yang dibuka." }
                    } else {
                        div { class: "landing-jobs-grid",
                            for job in jobs {
                                JobCard {
                                    key: "{job.id}",
                                    job: job.clone(),
                                    on_select: move |_| on_sign_in.call(()),
                                }
                            }
                        }
                    }
                    div { class: "landing-jobs-more",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_sign_in.call(()),
                            "Lihat Semua Casting"
                        }
                    }
                }
            }

            section { class: "landing-section landing-cta",
                div { class: "landing-container",
                    h3 { "Siap Memulai Perjalanan Casting Digital?" }
                    p { "Bergabung dengan ribuan client dan talent yang telah mempercayai {brand_name}" }
                    Button {
                        size: ButtonSize::Large,
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_sign_in.call(()),
                        "Daftar Sekarang"
                    }
                }
            }

            LandingFooter { brand_name: brand_name.clone() }
        }
    }
}

#[component]
fn HeroSection(on_sign_in: EventHandler<()>) -> Element {
    let mut image_failed = use_signal(|| false);

    rsx! {
        section { class: "landing-hero",
            div { class: "landing-container landing-hero-grid",
                div {
                    h2 { class: "landing-hero-title",
                        "Platform Casting Online "
                        span { class: "landing-accent", "Terdepan" }
                    }
                    p { class: "landing-hero-lead",
                        "Mempertemukan client dengan talent terbaik secara digital. "
                        "Proses casting yang cepat, mudah, dan transparan."
                    }
                    div { class: "landing-hero-actions",
                        Button {
                            size: ButtonSize::Large,
                            onclick: move |_| on_sign_in.call(()),
                            "Mulai Sekarang"
                        }
                        Button { size: ButtonSize::Large, variant: ButtonVariant::Outline,
                            "Pelajari Lebih Lanjut"
                        }
                    }
                }
                div { class: "landing-hero-media",
                    if image_failed() {
                        div { class: "landing-hero-placeholder", "Professional Models" }
                    } else {
                        img {
                            class: "landing-hero-image",
                            src: HERO_IMAGE_URL,
                            alt: "Professional Models",
                            onerror: move |_| image_failed.set(true),
                        }
                    }
                }
            }
        }
    }
}

/// Feature tile: icon, title and one-line pitch.
#[component]
fn FeatureTile(title: String, body: String, children: Element) -> Element {
    rsx! {
        Card { class: "landing-feature",
            CardHeader {
                div { class: "landing-feature-icon", {children} }
                CardTitle { "{title}" }
            }
            CardContent {
                p { class: "landing-muted", "{body}" }
            }
        }
    }
}

#[component]
fn FeatureSection() -> Element {
    rsx! {
        section { class: "landing-section",
            div { class: "landing-container",
                div { class: "landing-section-heading",
                    h3 { "Fitur Unggulan Platform" }
                    p { "Solusi lengkap untuk kebutuhan casting digital dengan teknologi terdepan" }
                }
                div { class: "landing-feature-grid",
                    FeatureTile {
                        title: "Client Dashboard",
                        body: "Posting kebutuhan casting dengan detail lengkap dan pantau aplikasi talent secara real-time",
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 48, height: 48 }
                    }
                    FeatureTile {
                        title: "Talent Registration",
                        body: "Buat profil lengkap dengan portofolio dan apply ke project casting yang sesuai",
                        Icon::<LdUser> { icon: LdUser, width: 48, height: 48 }
                    }
                    FeatureTile {
                        title: "Admin Control",
                        body: "Dashboard admin untuk mengelola dan melakukan shortlist kandidat terbaik",
                        Icon::<LdShield> { icon: LdShield, width: 48, height: 48 }
                    }
                }
            }
        }
    }
}

const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Platform", &["Untuk Client", "Untuk Talent", "Admin Panel"]),
    ("Support", &["Help Center", "Contact Us", "FAQ"]),
    ("Company", &["About Us", "Careers", "Privacy Policy"]),
];

#[component]
fn LandingFooter(brand_name: String) -> Element {
    rsx! {
        footer { class: "landing-footer",
            div { class: "landing-container",
                div { class: "landing-footer-grid",
                    div {
                        div { class: "landing-brand",
                            Icon::<LdStar> { icon: LdStar, width: 24, height: 24 }
                            span { class: "landing-footer-brand", "{brand_name}" }
                        }
                        p { "Platform casting online terdepan untuk industri kreatif Indonesia" }
                    }
                    for (heading, items) in FOOTER_COLUMNS.iter() {
                        div { key: "{heading}",
                            h4 { "{heading}" }
                            ul {
                                for item in items.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
                div { class: "landing-footer-legal",
                    p { "© 2024 {brand_name}. All rights reserved." }
                }
            }
        }
    }
}
