//! About section: bio, interests, stats and the education timeline.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::reveal::{RevealGroup, RevealItem};
use crate::content::{EDUCATION, EducationEntry, EducationStatus, HOBBIES, STATS, StatEntry};

/// Render-ready classes for one education timeline row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineItem {
    pub year: &'static str,
    pub school: &'static str,
    pub item_class: &'static str,
    pub node_class: &'static str,
    pub node_glyph: &'static str,
    pub content_class: &'static str,
    pub status_class: &'static str,
    pub status_label: &'static str,
}

/// Project `entries` onto timeline rows. The final row carries the "last"
/// marker so it draws no trailing connector.
pub fn timeline_items(entries: &[EducationEntry]) -> Vec<TimelineItem> {
    let last = entries.len().saturating_sub(1);
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let soon = entry.status == EducationStatus::Soon;
            TimelineItem {
                year: entry.year,
                school: entry.school,
                item_class: if i == last { "tree-item tree-item-last" } else { "tree-item" },
                node_class: if soon { "tree-node node-soon" } else { "tree-node node-completed" },
                node_glyph: if soon { "?" } else { "✓" },
                content_class: if soon { "tree-content content-soon" } else { "tree-content" },
                status_class: if soon { "tree-status status-soon" } else { "tree-status status-completed" },
                status_label: entry.status.label(),
            }
        })
        .collect()
}

/// Empty tables drop their block; the section headers always render.
#[component]
pub fn About(
    #[prop(default = STATS)] stats: &'static [StatEntry],
    #[prop(default = EDUCATION)] education: &'static [EducationEntry],
    #[prop(default = HOBBIES)] hobbies: &'static [&'static str],
) -> impl IntoView {
    let timeline = timeline_items(education);

    view! {
        <section id="about" class="section">
            <div class="container">
                <RevealGroup class="about-grid">
                    <RevealItem class="about-content">
                        <p class="section-label">"About"</p>
                        <h2 class="section-title">"Engineering automation that drives results"</h2>
                        <div class="about-text">
                            <p>
                                "I'm Raffli, a self-taught automation engineer based in "
                                <strong>"Pontianak Timur, Indonesia"</strong>
                                ". What started as a hobby quickly evolved into a passion for building scalable systems that eliminate repetitive tasks and optimize workflows."
                            </p>
                            <p>
                                "My expertise spans across Python and JavaScript ecosystems, with deep knowledge in Node.js architecture. Having delivered 20+ production-ready automation solutions, I've mastered web scraping at scale, API orchestration, and end-to-end workflow automation."
                            </p>
                        </div>
                        {(!hobbies.is_empty())
                            .then(|| {
                                view! {
                                    <div class="hobbies">
                                        <p class="hobbies-label">"Interests"</p>
                                        <div class="hobbies-tags">
                                            {hobbies
                                                .iter()
                                                .map(|hobby| view! { <span class="hobby-tag">{*hobby}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                    </RevealItem>
                    {(!stats.is_empty())
                        .then(|| {
                            view! {
                                <RevealItem class="stats-grid">
                                    {stats
                                        .iter()
                                        .map(|stat| {
                                            view! {
                                                <div class="stat-card">
                                                    <p class="stat-number">{stat.number}</p>
                                                    <p class="stat-label">{stat.label}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </RevealItem>
                            }
                        })}
                </RevealGroup>

                <RevealGroup class="education-section">
                    <RevealItem class="section-header">
                        <p class="section-label">"Education"</p>
                        <h2 class="section-title">"Academic Journey"</h2>
                    </RevealItem>
                    {(!timeline.is_empty())
                        .then(|| {
                            view! {
                                <div class="education-tree">
                                    {timeline.into_iter().map(timeline_row).collect_view()}
                                </div>
                            }
                        })}
                </RevealGroup>
            </div>
        </section>
    }
}

fn timeline_row(item: TimelineItem) -> impl IntoView {
    view! {
        <RevealItem class=item.item_class>
            <div class="tree-line">
                <div class=item.node_class>{item.node_glyph}</div>
            </div>
            <div class=item.content_class>
                <span class="tree-year">{item.year}</span>
                <h3 class="tree-school">{item.school}</h3>
                <span class=item.status_class>{item.status_label}</span>
            </div>
        </RevealItem>
    }
}
