//! Root application component, HTML shell and page-scoped services.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{self, EMBED_ELEMENT_ID, SiteLinks};
use crate::pages::home::HomePage;
use crate::util::viewport::ViewportBus;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `links` is embedded as JSON so the hydrating client resolves the same
/// values the server rendered with.
pub fn shell(options: LeptosOptions, links: SiteLinks) -> impl IntoView {
    let embedded = config::embed_json(&links).unwrap_or_else(|_| String::from("null"));

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=EMBED_ELEMENT_ID type="application/json" inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the resolved site links and the viewport bus, installs the
/// page's only window listeners, and mounts the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(config::resolve());
    let bus = ViewportBus::new();
    provide_context(bus);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::read_viewport;

        let publish = move || {
            if let Some(snapshot) = read_viewport() {
                bus.publish(snapshot);
            }
        };
        let scroll = window_event_listener(leptos::ev::scroll, move |_| publish());
        let resize = window_event_listener(leptos::ev::resize, move |_| publish());
        Effect::new(publish);
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Muhammad Raffli Aldiansyah | Automation Engineer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
