use leptos::prelude::*;

use super::*;

#[test]
fn three_groups_give_three_cards_of_four_tags() {
    let cards = skill_cards(SKILLS);
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|c| c.tags.len() == 4));
}

#[test]
fn card_and_tag_order_is_preserved() {
    let cards = skill_cards(SKILLS);
    let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Languages", "Runtime & Frameworks", "Automation"]);
    assert_eq!(cards[0].tags, ["Python", "JavaScript", "TypeScript", "HTML/CSS"]);
    assert_eq!(cards[2].tags, ["Selenium", "Puppeteer", "Playwright", "Scrapy"]);
}

#[test]
fn icons_follow_groups() {
    let icons: Vec<_> = skill_cards(SKILLS).iter().map(|c| c.icon).collect();
    assert_eq!(icons, [IconRef::Code2, IconRef::Terminal, IconRef::Zap]);
}

#[test]
fn no_groups_no_cards() {
    assert!(skill_cards(&[]).is_empty());
}

// =============================================================
// Server render
// =============================================================

fn render_skills(groups: &'static [SkillGroup]) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <Skills groups=groups/> }.to_html())
}

#[test]
fn page_render_has_three_cards_with_four_tags_each() {
    let html = render_skills(SKILLS);
    assert_eq!(html.matches(r#"class="skill-card""#).count(), 3);
    assert_eq!(html.matches(r#"class="skill-tag""#).count(), 12);

    let python = html.find("Python").unwrap();
    let node = html.find("Node.js").unwrap();
    let selenium = html.find("Selenium").unwrap();
    assert!(python < node && node < selenium);
}

#[test]
fn cards_render_hidden_until_revealed() {
    let html = render_skills(SKILLS);
    assert_eq!(html.matches("transform: scale(0.8)").count(), 3);
}

#[test]
fn empty_groups_render_header_only() {
    let html = render_skills(&[]);
    assert!(html.contains(r#"id="skills""#));
    assert!(html.contains(r#"class="section-header""#));
    assert!(!html.contains("skills-grid"));
    assert!(!html.contains("skill-card"));
}
