//! Page footer.

use leptos::prelude::*;

use crate::content::{COPYRIGHT_YEAR, OWNER_FIRST_NAME, OWNER_SURNAME};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {COPYRIGHT_YEAR} {OWNER_FIRST_NAME} {OWNER_SURNAME}. All rights reserved.");

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <p>{copyright}</p>
                    <p>"Built with Rust & Leptos"</p>
                </div>
            </div>
        </footer>
    }
}
