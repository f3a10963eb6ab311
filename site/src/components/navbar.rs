//! Fixed navigation bar with scroll styling and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns an `RwSignal<NavState>` for the scroll flag and menu state. Scroll
//! offsets arrive through the page's viewport bus; the subscription is
//! dropped on cleanup. The bar slides down once on mount, and the mobile
//! panel animates in and out around its mount through a `Presence`.

use leptos::prelude::*;
use motion::presence::Presence;
use motion::style::StyleState;
use motion::transition::Transition;
use motion::variant::Preset;

use crate::components::icon::Icon;
use crate::content::{IconRef, NAV_LINKS};
use crate::state::nav::NavState;

const LOGO_HOVER_SCALE: f64 = 1.05;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let entrance = RwSignal::new(Transition::new(Preset::NavSlideDown));
    let menu = RwSignal::new(Presence::new(Preset::MenuPanel));
    let menu_open = Memo::new(move |_| nav.with(NavState::is_menu_open));
    let logo_hovered = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::ops::ControlFlow;

        use crate::util::frame_loop::{Lifeline, now_ms, run_frames};
        use crate::util::viewport::ViewportBus;

        let lifeline = Lifeline::new();

        let entrance_line = lifeline.clone();
        Effect::new(move || {
            if !entrance.try_update(|t| t.show(now_ms())).unwrap_or(false) {
                return;
            }
            run_frames(entrance_line.clone(), move |now| {
                let running = entrance.try_update(|t| {
                    t.tick(now);
                    !t.is_settled()
                });
                if running == Some(true) { ControlFlow::Continue(()) } else { ControlFlow::Break(()) }
            });
        });

        let menu_line = lifeline.clone();
        Effect::new(move || {
            let open = menu_open.get();
            menu.try_update(|p| p.set_present(open, now_ms()));
            run_frames(menu_line.clone(), move |now| match menu.try_update(|p| p.tick(now)) {
                Some(true) => ControlFlow::Continue(()),
                _ => ControlFlow::Break(()),
            });
        });

        let bus = use_context::<ViewportBus>();
        let subscription = bus.and_then(|bus| {
            bus.subscribe(move |viewport| {
                nav.maybe_update(|s| s.on_scroll(viewport.scroll_y));
                ControlFlow::Continue(())
            })
        });

        on_cleanup(move || {
            lifeline.end();
            if let (Some(bus), Some(id)) = (bus, subscription) {
                bus.unsubscribe(id);
            }
        });
    }

    let nav_style = move || entrance.with(|t| t.style().to_css());
    let logo_style = move || {
        if logo_hovered.get() { StyleState::IDENTITY.with_scale(LOGO_HOVER_SCALE).to_css() } else { String::new() }
    };
    let menu_style = move || menu.with(|p| p.style().to_css());

    view! {
        <nav class=move || nav.with(NavState::navbar_class) style=nav_style>
            <div class="navbar-container">
                <a
                    href="#"
                    class="navbar-logo"
                    style=logo_style
                    on:mouseenter=move |_| logo_hovered.set(true)
                    on:mouseleave=move |_| logo_hovered.set(false)
                >
                    "raffli"
                    <span style="opacity: 0.5">".dev"</span>
                </a>

                <div class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="navbar-link">{link.name}</a> })
                        .collect_view()}
                </div>

                <button
                    class="navbar-mobile-btn"
                    aria-label=move || nav.with(NavState::toggle_label)
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        let icon = if menu_open.get() { IconRef::Close } else { IconRef::Menu };
                        view! { <Icon icon=icon size=24/> }
                    }}
                </button>
            </div>

            <Show when=move || menu.with(Presence::is_mounted)>
                <div class="navbar-mobile-menu" style=menu_style>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="navbar-mobile-link"
                                    on:click=move |_| nav.update(NavState::activate_link)
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
