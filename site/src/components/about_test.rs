use leptos::prelude::*;

use super::*;

fn entry(status: EducationStatus) -> EducationEntry {
    EducationEntry { year: "2000 - 2001", school: "School", status }
}

#[test]
fn page_timeline_marks_only_last_as_soon() {
    let items = timeline_items(EDUCATION);
    assert_eq!(items.len(), 4);

    let (last, rest) = items.split_last().unwrap();
    assert_eq!(last.node_class, "tree-node node-soon");
    assert_eq!(last.node_glyph, "?");
    assert_eq!(last.content_class, "tree-content content-soon");
    assert_eq!(last.status_class, "tree-status status-soon");
    assert_eq!(last.status_label, "Soon");

    for item in rest {
        assert_eq!(item.node_class, "tree-node node-completed");
        assert_eq!(item.node_glyph, "✓");
        assert_eq!(item.content_class, "tree-content");
        assert_eq!(item.status_class, "tree-status status-completed");
    }
}

#[test]
fn last_marker_follows_position_not_status() {
    let items = timeline_items(&[entry(EducationStatus::Soon), entry(EducationStatus::Completed)]);
    assert_eq!(items[0].item_class, "tree-item");
    assert_eq!(items[0].node_class, "tree-node node-soon");
    assert_eq!(items[1].item_class, "tree-item tree-item-last");
    assert_eq!(items[1].node_class, "tree-node node-completed");
}

#[test]
fn soon_classes_hold_for_any_length() {
    for len in 1..8 {
        let mut entries = vec![entry(EducationStatus::Completed); len - 1];
        entries.push(entry(EducationStatus::Soon));
        let items = timeline_items(&entries);
        let soon = items.iter().filter(|i| i.node_class.ends_with("node-soon")).count();
        let last = items.iter().filter(|i| i.item_class.ends_with("tree-item-last")).count();
        assert_eq!(soon, 1, "len {len}");
        assert_eq!(last, 1, "len {len}");
        assert!(items[len - 1].node_class.ends_with("node-soon"));
    }
}

#[test]
fn single_entry_is_last() {
    let items = timeline_items(&[entry(EducationStatus::Completed)]);
    assert_eq!(items[0].item_class, "tree-item tree-item-last");
}

#[test]
fn empty_history_has_no_rows() {
    assert!(timeline_items(&[]).is_empty());
}

#[test]
fn rows_keep_source_order() {
    let schools: Vec<_> = timeline_items(EDUCATION).iter().map(|i| i.school).collect();
    let expected: Vec<_> = EDUCATION.iter().map(|e| e.school).collect();
    assert_eq!(schools, expected);
}

// =============================================================
// Server render
// =============================================================

#[test]
fn page_render_lists_timeline_stats_and_interests() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <About/> }.to_html());
    assert_eq!(html.matches(r#"class="stat-card""#).count(), 4);
    assert_eq!(html.matches(r#"class="hobby-tag""#).count(), 3);
    assert_eq!(html.matches(r#"class="tree-item"#).count(), 4);
    assert_eq!(html.matches("tree-item-last").count(), 1);
    assert_eq!(html.matches(r#"class="tree-node node-soon""#).count(), 1);
}

#[test]
fn empty_tables_render_headers_only() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <About stats=&[] education=&[] hobbies=&[]/> }.to_html());
    assert!(html.contains("Academic Journey"));
    assert_eq!(html.matches(r#"class="section-header""#).count(), 1);
    assert!(!html.contains("stats-grid"));
    assert!(!html.contains("education-tree"));
    assert!(!html.contains(r#"class="hobbies""#));
}
