//! Staggered reveal containers.
//!
//! DESIGN
//! ======
//! A [`RevealGroup`] owns one [`Choreography`] in an `RwSignal` and exposes it
//! to descendants through context. Each [`RevealItem`] registers itself while
//! the group's children are being built, so registration order is document
//! order and therefore stagger order.
//!
//! In-view groups subscribe to the [`ViewportBus`] once their element exists,
//! run a one-shot [`motion::reveal::RevealGate`] against the element's
//! bounding rect on every snapshot, and drop the subscription on the first
//! fire. Nothing ever hides a revealed group again.

use leptos::prelude::*;
use motion::choreography::{ChildIndex, Choreography};
use motion::variant::Preset;

#[cfg(feature = "hydrate")]
use crate::util::frame_loop::{Lifeline, now_ms, run_frames};

/// What starts a group's entrance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First intersection with the (margin-adjusted) viewport.
    #[default]
    InView,
    /// Immediately after hydration.
    OnMount,
}

#[derive(Clone, Copy)]
struct RevealContext(RwSignal<Choreography>);

/// Container whose children fade in one after another.
#[component]
pub fn RevealGroup(
    #[prop(optional, into)] class: String,
    #[prop(optional)] trigger: RevealTrigger,
    children: Children,
) -> impl IntoView {
    let choreo = RwSignal::new(Choreography::default());
    provide_context(RevealContext(choreo));
    let content = children();
    let group_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let lifeline = Lifeline::new();
        match trigger {
            RevealTrigger::OnMount => {
                let lifeline = lifeline.clone();
                Effect::new(move || start_reveal(choreo, lifeline.clone()));
            }
            RevealTrigger::InView => watch_viewport(choreo, group_ref, lifeline.clone()),
        }
        on_cleanup(move || lifeline.end());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = trigger;

    view! {
        <div class=class node_ref=group_ref style=move || choreo.with(|c| c.container_style().to_css())>
            {content}
        </div>
    }
}

/// One staggered child of the nearest [`RevealGroup`].
///
/// Outside a group the item renders fully visible.
#[component]
pub fn RevealItem(
    #[prop(default = Preset::FadeInUp)] preset: Preset,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let group = use_context::<RevealContext>();
    let index: Option<ChildIndex> = group.and_then(|g| g.0.try_update(|c| c.register(preset)));

    let style = move || match (group, index) {
        (Some(g), Some(i)) => g.0.with(|c| c.child_style(i).to_css()),
        _ => String::new(),
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn watch_viewport(choreo: RwSignal<Choreography>, group_ref: NodeRef<leptos::html::Div>, lifeline: Lifeline) {
    use std::ops::ControlFlow;

    use motion::reveal::{ElementBounds, RevealDecision, RevealGate};
    use motion::viewport::SubscriptionId;

    use crate::util::viewport::ViewportBus;

    let Some(bus) = use_context::<ViewportBus>() else {
        log::warn!("reveal group mounted without a viewport bus; revealing immediately");
        Effect::new(move || start_reveal(choreo, lifeline.clone()));
        return;
    };
    let subscription = StoredValue::new(None::<SubscriptionId>);

    Effect::new(move || {
        if group_ref.get().is_none() || subscription.get_value().is_some() {
            return;
        }
        let mut gate = RevealGate::default();
        let lifeline = lifeline.clone();
        let id = bus.subscribe(move |viewport| {
            let Some(el) = group_ref.get_untracked() else {
                return ControlFlow::Continue(());
            };
            let rect = el.get_bounding_client_rect();
            let bounds = ElementBounds::new(rect.top(), rect.bottom(), rect.left(), rect.right());
            match gate.observe(&bounds, viewport) {
                RevealDecision::Pending => ControlFlow::Continue(()),
                RevealDecision::Fire => {
                    start_reveal(choreo, lifeline.clone());
                    ControlFlow::Break(())
                }
                RevealDecision::Done => ControlFlow::Break(()),
            }
        });
        subscription.set_value(id);
    });

    on_cleanup(move || {
        if let Some(id) = subscription.try_get_value().flatten() {
            bus.unsubscribe(id);
        }
    });
}

#[cfg(feature = "hydrate")]
fn start_reveal(choreo: RwSignal<Choreography>, lifeline: Lifeline) {
    use std::ops::ControlFlow;

    if !choreo.try_update(|c| c.reveal(now_ms())).unwrap_or(false) {
        return;
    }
    run_frames(lifeline, move |now| match choreo.try_update(|c| c.tick(now)) {
        Some(true) => ControlFlow::Continue(()),
        _ => ControlFlow::Break(()),
    });
}
