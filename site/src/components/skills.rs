//! Skills grid: one scale-in card per skill group.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;
use motion::variant::Preset;

use crate::components::icon::Icon;
use crate::components::reveal::{RevealGroup, RevealItem};
use crate::content::{IconRef, SKILLS, SkillGroup};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCard {
    pub title: &'static str,
    pub icon: IconRef,
    pub tags: Vec<&'static str>,
}

pub fn skill_cards(groups: &[SkillGroup]) -> Vec<SkillCard> {
    groups
        .iter()
        .map(|g| SkillCard { title: g.category, icon: g.icon, tags: g.items.to_vec() })
        .collect()
}

/// With no groups only the section header renders.
#[component]
pub fn Skills(#[prop(default = SKILLS)] groups: &'static [SkillGroup]) -> impl IntoView {
    let cards = skill_cards(groups);

    view! {
        <section id="skills" class="section section-alt">
            <div class="container">
                <RevealGroup>
                    <RevealItem class="section-header">
                        <p class="section-label">"Skills"</p>
                        <h2 class="section-title">"Tech Stack & Tools"</h2>
                    </RevealItem>
                    {(!cards.is_empty())
                        .then(|| {
                            view! {
                                <div class="skills-grid">
                                    {cards.into_iter().map(skill_card).collect_view()}
                                </div>
                            }
                        })}
                </RevealGroup>
            </div>
        </section>
    }
}

fn skill_card(card: SkillCard) -> impl IntoView {
    view! {
        <RevealItem preset=Preset::ScaleIn class="skill-card">
            <div class="skill-header">
                <div class="skill-icon">
                    <Icon icon=card.icon size=20/>
                </div>
                <h3 class="skill-title">{card.title}</h3>
            </div>
            <div class="skill-tags">
                {card.tags.into_iter().map(|tag| view! { <span class="skill-tag">{tag}</span> }).collect_view()}
            </div>
        </RevealItem>
    }
}
