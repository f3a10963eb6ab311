//! Inline stroke glyphs.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::content::IconRef;

/// SVG path data for `icon` on a 24x24 stroke grid.
pub fn icon_paths(icon: IconRef) -> &'static [&'static str] {
    match icon {
        IconRef::Code2 => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
        IconRef::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        IconRef::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        IconRef::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        IconRef::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
        ],
        IconRef::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 6-10 7L2 6",
        ],
        IconRef::ChevronDown => &["m6 9 6 6 6-6"],
        IconRef::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconRef::Close => &["M18 6 6 18", "m6 6 12 12"],
        IconRef::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
    }
}

/// Decorative glyph. Hidden from assistive technology; the enclosing
/// control carries the label.
#[component]
pub fn Icon(icon: IconRef, #[prop(default = 24)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class=class
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
