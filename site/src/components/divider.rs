use leptos::prelude::*;

/// Horizontal rule between page sections.
#[component]
pub fn Divider() -> impl IntoView {
    view! { <div class="divider"></div> }
}
