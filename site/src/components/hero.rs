//! Landing banner and the bouncing scroll indicator.

use leptos::prelude::*;
use motion::transition::Transition;
use motion::variant::Preset;

use crate::components::icon::Icon;
use crate::components::reveal::{RevealGroup, RevealItem, RevealTrigger};
use crate::config::{self, SiteLinks};
use crate::content::{IconRef, OWNER_FIRST_NAME, OWNER_SURNAME};

#[component]
pub fn Hero() -> impl IntoView {
    let links = config::resolve();
    let mailto = links.mailto();
    let SiteLinks { github_url, linkedin_url, .. } = links;

    view! {
        <section class="hero">
            <div class="hero-bg"></div>
            <div class="hero-content">
                <RevealGroup trigger=RevealTrigger::OnMount>
                    <RevealItem class="hero-subtitle">"Automation Engineer"</RevealItem>
                    <RevealItem>
                        <h1 class="hero-title">
                            {OWNER_FIRST_NAME}
                            <span class="hero-title-dim">{OWNER_SURNAME}</span>
                        </h1>
                    </RevealItem>
                    <RevealItem class="hero-description">
                        "Crafting intelligent automation systems that transform complex workflows into seamless, efficient processes."
                    </RevealItem>
                    <RevealItem class="hero-buttons">
                        <a href="#projects" class="btn-primary">"View Projects"</a>
                        <a href="#contact" class="btn-secondary">"Get in Touch"</a>
                    </RevealItem>
                    <RevealItem class="hero-socials">
                        <a href=github_url target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            <Icon icon=IconRef::Github size=22/>
                        </a>
                        <a href=linkedin_url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            <Icon icon=IconRef::Linkedin size=22/>
                        </a>
                        <a href=mailto aria-label="Email">
                            <Icon icon=IconRef::Mail size=22/>
                        </a>
                    </RevealItem>
                </RevealGroup>
                <ScrollIndicator/>
            </div>
        </section>
    }
}

/// Chevron that fades in late and then bobs until the hero unmounts.
#[component]
fn ScrollIndicator() -> impl IntoView {
    let fade = RwSignal::new(Transition::new(Preset::DelayedFade));
    let offset = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use std::ops::ControlFlow;

        use motion::oscillator::Oscillator;

        use crate::util::frame_loop::{Lifeline, now_ms, run_frames};

        let bob = StoredValue::new(Oscillator::default());
        let lifeline = Lifeline::new();
        let frames = lifeline.clone();

        Effect::new(move || {
            let now = now_ms();
            fade.try_update(|t| t.show(now));
            bob.try_update_value(|o| o.start(now));
            run_frames(frames.clone(), move |now| {
                fade.try_update(|t| {
                    t.tick(now);
                });
                match bob.try_with_value(|o| o.tick(now)).flatten() {
                    Some(y) if offset.try_update(|o| *o = y).is_some() => ControlFlow::Continue(()),
                    _ => ControlFlow::Break(()),
                }
            });
        });

        on_cleanup(move || {
            bob.try_update_value(Oscillator::stop);
            lifeline.end();
        });
    }

    let style = move || fade.with(|t| t.style()).with_translate_y(offset.get()).to_css();

    view! {
        <div class="hero-scroll" style=style aria-hidden="true">
            <Icon icon=IconRef::ChevronDown size=28/>
        </div>
    }
}
