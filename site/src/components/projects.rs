//! Featured project cards.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use motion::variant::Preset;

use crate::components::icon::Icon;
use crate::components::reveal::{RevealGroup, RevealItem};
use crate::content::{IconRef, PROJECTS, ProjectEntry};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: Vec<&'static str>,
}

pub fn project_cards(entries: &[ProjectEntry]) -> Vec<ProjectCard> {
    entries
        .iter()
        .map(|p| ProjectCard { title: p.title, description: p.description, tags: p.tech.to_vec() })
        .collect()
}

/// With no projects only the section header renders.
#[component]
pub fn Projects(#[prop(default = PROJECTS)] projects: &'static [ProjectEntry]) -> impl IntoView {
    let cards = project_cards(projects);

    view! {
        <section id="projects" class="section">
            <div class="container">
                <RevealGroup>
                    <RevealItem class="section-header">
                        <p class="section-label">"Portfolio"</p>
                        <h2 class="section-title">"Featured Work"</h2>
                        <p class="section-description">
                            "Production-ready automation solutions that have processed thousands of transactions and saved countless hours of manual work."
                        </p>
                    </RevealItem>
                    {(!cards.is_empty())
                        .then(|| {
                            view! {
                                <div class="projects-grid">
                                    {cards.into_iter().map(project_card).collect_view()}
                                </div>
                            }
                        })}
                </RevealGroup>
            </div>
        </section>
    }
}

fn project_card(card: ProjectCard) -> impl IntoView {
    view! {
        <RevealItem preset=Preset::ScaleIn class="project-card">
            <div class="project-header">
                <h3 class="project-title">{card.title}</h3>
                <Icon icon=IconRef::ArrowUpRight size=18 class="project-arrow"/>
            </div>
            <p class="project-description">{card.description}</p>
            <div class="project-tags">
                {card.tags.into_iter().map(|tag| view! { <span class="project-tag">{tag}</span> }).collect_view()}
            </div>
        </RevealItem>
    }
}
