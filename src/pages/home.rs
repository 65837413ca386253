//! The portfolio page: hero, about, projects, experience, and contact
//! sections under the fixed site header.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::header::SiteHeader;
use crate::components::reveal::Reveal;
use crate::util::scroll::on_anchor_click;

/// Endpoint receiving contact form submissions.
const CONTACT_ACTION: &str = "https://formspree.io/f/xkndqgvr";

struct Project {
    name: &'static str,
    summary: &'static str,
    link: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        name: "tidewatch",
        summary: "Streaming log viewer that keeps a bounded index over multi-GB files.",
        link: "https://github.com/alexchen/tidewatch",
    },
    Project {
        name: "quern",
        summary: "Columnar on-disk cache with crash-safe compaction.",
        link: "https://github.com/alexchen/quern",
    },
    Project {
        name: "driftless",
        summary: "Clock-drift aware scheduler for distributed cron jobs.",
        link: "https://github.com/alexchen/driftless",
    },
];

struct ExperienceItem {
    role: &'static str,
    org: &'static str,
    span: &'static str,
    summary: &'static str,
}

const EXPERIENCE: [ExperienceItem; 3] = [
    ExperienceItem {
        role: "Senior Systems Engineer",
        org: "Meridian Data",
        span: "2022 - present",
        summary: "Storage-layer performance work and the internal observability stack.",
    },
    ExperienceItem {
        role: "Backend Engineer",
        org: "Halyard",
        span: "2019 - 2022",
        summary: "Built the ingestion pipeline and its replay tooling.",
    },
    ExperienceItem {
        role: "Software Engineer",
        org: "Northbeam Labs",
        span: "2016 - 2019",
        summary: "Shipped the first version of the customer-facing API.",
    },
];

/// The single page. Wires the active-section observer once the
/// sections are mounted.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let nav = expect_context::<RwSignal<crate::state::nav::NavState>>();
        Effect::new(move || crate::util::observer::watch_sections(nav));
    }

    view! {
        <SiteHeader/>
        <main>
            <section class="hero">
                <h1>"Alex Chen"</h1>
                <p class="hero__tagline">"Systems engineer building fast, quiet software."</p>
                <div class="hero__actions">
                    <a
                        href="#projects"
                        class="btn btn--primary"
                        on:click=move |ev| on_anchor_click(&ev, "#projects")
                    >
                        "See projects"
                    </a>
                    <a href="#contact" class="btn" on:click=move |ev| on_anchor_click(&ev, "#contact")>
                        "Get in touch"
                    </a>
                </div>
            </section>

            <section id="about" class="section">
                <h2>"About"</h2>
                <Reveal class="about-content">
                    <p>
                        "I build backend services and the tooling around them, with a "
                        "bias for boring, measurable solutions. Lately that means Rust "
                        "on both sides of the wire, including this page."
                    </p>
                </Reveal>
                <Reveal class="about-skills">
                    <ul>
                        <li>"Rust"</li>
                        <li>"WebAssembly"</li>
                        <li>"Distributed systems"</li>
                        <li>"PostgreSQL"</li>
                    </ul>
                </Reveal>
            </section>

            <section id="projects" class="section">
                <h2>"Projects"</h2>
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <Reveal class="project">
                                <h3>{project.name}</h3>
                                <p>{project.summary}</p>
                                <a href=project.link target="_blank" rel="noreferrer">
                                    "Source"
                                </a>
                            </Reveal>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section id="experience" class="section">
                <h2>"Experience"</h2>
                {EXPERIENCE
                    .iter()
                    .map(|item| {
                        view! {
                            <Reveal class="experience-item">
                                <h3>{item.role}</h3>
                                <p class="experience-item__org">{item.org} " · " {item.span}</p>
                                <p>{item.summary}</p>
                            </Reveal>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section id="contact" class="section">
                <h2>"Contact"</h2>
                <Reveal class="contact-info">
                    <p>
                        "Have a project in mind? Send a note and I'll reply within a "
                        "couple of days, or email "
                        <a href="mailto:hello@alexchen.dev">"hello@alexchen.dev"</a> " directly."
                    </p>
                </Reveal>
                <Reveal class="contact-form">
                    <ContactForm action=CONTACT_ACTION/>
                </Reveal>
            </section>
        </main>

        <footer class="site-footer">
            <p>"© 2025 Alex Chen"</p>
        </footer>
    }
}
