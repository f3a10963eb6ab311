//! The portfolio page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::divider::Divider;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

/// Sections in fixed order. Sections share no state with each other.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="app">
            <Navbar/>
            <Hero/>
            <Divider/>
            <About/>
            <Skills/>
            <Divider/>
            <Projects/>
            <Contact/>
            <Footer/>
        </div>
    }
}
