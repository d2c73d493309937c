use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::{
    decor::{BrandIcon, CompanyLogo, FloatingIcons, HoverLift, Reveal},
    state::PageState,
};
use crate::{config::SITE, sections::Section};

const BUILD_TIME: &str = env!("BUILD_TIME");

struct Role {
    company: &'static str,
    title: &'static str,
    period: &'static str,
    logo: &'static str,
    invert_logo: bool,
    points: &'static [&'static str],
    tags: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        company: "MakeMyTrip",
        title: "Software Development Engineer",
        period: "2021 - 2023",
        logo: "/images/makemytrip.svg",
        invert_logo: true,
        points: &[
            "Built and maintained features in a high-traffic Android travel app.",
            "Worked on backend services behind search and booking flows.",
        ],
        tags: &["Kotlin", "Android", "Java", "Microservices"],
    },
    Role {
        company: "University Research Lab",
        title: "Graduate Researcher",
        period: "2023 - Present",
        logo: "/images/university.svg",
        invert_logo: false,
        points: &[
            "Research on machine learning for distributed systems.",
            "Designed experiments and evaluation pipelines.",
        ],
        tags: &["Python", "PyTorch", "Distributed Systems"],
    },
];

struct Project {
    name: &'static str,
    summary: &'static str,
    link: &'static str,
    tech: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Distributed Key-Value Store",
        summary: "Replicated key-value store with leader election and log replication.",
        link: "https://github.com/",
        tech: &["Go", "Raft", "gRPC"],
    },
    Project {
        name: "On-device Image Classifier",
        summary: "Android app running a quantized model for offline image classification.",
        link: "https://github.com/",
        tech: &["Android", "TensorFlow Lite", "Kotlin"],
    },
    Project {
        name: "Portfolio Site",
        summary: "This site: server-rendered and hydrated with Rust and WebAssembly.",
        link: "https://github.com/",
        tech: &["Rust", "Leptos", "WASM"],
    },
];

struct Publication {
    title: &'static str,
    venue: &'static str,
    link: &'static str,
}

const PUBLICATIONS: &[Publication] = &[Publication {
    title: "Learning-based Scheduling for Heterogeneous Clusters",
    venue: "Workshop paper",
    link: "https://scholar.google.com/",
}];

const SKILLS: &[(&str, &[&str])] = &[
    ("Languages", &["Java", "Kotlin", "Python", "Go", "Rust", "JavaScript"]),
    ("Mobile", &["Android", "Jetpack Compose", "TensorFlow Lite"]),
    ("Infrastructure", &["AWS", "Docker", "Kubernetes", "Git"]),
];

const HERO_ICONS: &[&str] = &[
    "fab fa-android",
    "fab fa-java",
    "fab fa-python",
    "fab fa-aws",
    "fab fa-docker",
    "fab fa-react",
];

/// Wraps a page section. The router's active section gets `active`.
#[component]
pub(super) fn PageSection(section: Section, children: Children) -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <section id=section.id() class="section" class:active=move || state.active.get() == section>
            {children()}
        </section>
    }
}

#[component]
fn SectionLink(section: Section, class: &'static str, children: Children) -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <a
            href=format!("#{}", section.id())
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                state.navigate(section.id());
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn HomeSection(typed: ReadSignal<String>) -> impl IntoView {
    view! {
        <PageSection section=Section::Home>
            <div class="hero">
                <h1 class="hero-title">"Hi, I'm " <span class="highlight">{SITE.owner}</span></h1>
                <h2 class="hero-subtitle">
                    <span>{move || typed.get()}</span>
                    <span class="cursor">"|"</span>
                </h2>
                <div class="hero-actions">
                    <HoverLift>
                        <SectionLink section=Section::Projects class="btn-primary">
                            "View Projects"
                        </SectionLink>
                    </HoverLift>
                    <HoverLift>
                        <SectionLink section=Section::Contact class="btn-secondary">
                            "Get in Touch"
                        </SectionLink>
                    </HoverLift>
                </div>
                <FloatingIcons icons=HERO_ICONS />
            </div>
        </PageSection>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <PageSection section=Section::About>
            <h2 class="section-title">"About Me"</h2>
            <p class="about-text">
                "Software engineer working across Android, backend services and machine learning research. I enjoy distributed systems problems and building products people use every day."
            </p>
            <div class="skills">
                {SKILLS
                    .iter()
                    .map(|(category, skills)| {
                        view! {
                            <Reveal class="skill-category">
                                <h3>{*category}</h3>
                                <div class="skill-tags">
                                    {skills
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <HoverLift class="skill-tag">{*s}</HoverLift>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <PageSection section=Section::Experience>
            <h2 class="section-title">"Experience"</h2>
            <div class="timeline">
                {ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <Reveal class="timeline-node">
                                <HoverLift class="experience-card">
                                    <CompanyLogo
                                        src=role.logo
                                        alt=role.company
                                        invert=role.invert_logo
                                    />
                                    <h3>{role.title}</h3>
                                    <div class="company-tag">{role.company}</div>
                                    <div class="period">{role.period}</div>
                                    <ul>
                                        {role.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                    </ul>
                                    <div class="tech-tags">
                                        {role
                                            .tags
                                            .iter()
                                            .map(|t| view! { <span class="tech-tag">{*t}</span> })
                                            .collect_view()}
                                    </div>
                                </HoverLift>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <PageSection section=Section::Projects>
            <h2 class="section-title">"Projects"</h2>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <Reveal>
                                <HoverLift class="project-card">
                                    <h3>{project.name}</h3>
                                    <p>{project.summary}</p>
                                    <div class="tech-tags">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|t| view! { <span class="tech-tag">{*t}</span> })
                                            .collect_view()}
                                    </div>
                                    <a href=project.link target="_blank" rel="noopener noreferrer">
                                        <BrandIcon class="fab fa-github" />
                                        " Source"
                                    </a>
                                </HoverLift>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn PublicationsSection() -> impl IntoView {
    view! {
        <PageSection section=Section::Publications>
            <h2 class="section-title">"Publications"</h2>
            {PUBLICATIONS
                .iter()
                .map(|p| {
                    view! {
                        <Reveal>
                            <HoverLift class="publication-card">
                                <h3>
                                    <a href=p.link target="_blank" rel="noopener noreferrer">
                                        {p.title}
                                    </a>
                                </h3>
                                <div class="venue">{p.venue}</div>
                            </HoverLift>
                        </Reveal>
                    }
                })
                .collect_view()}
        </PageSection>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year().to_string())
        .unwrap_or_default();
    view! {
        <footer class="site-footer">
            <p>{format!("© {year} {}", SITE.owner)}</p>
            <p class="build-time">{format!("Built {BUILD_TIME}")}</p>
        </footer>
    }
}
