//! Contact call-to-action.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::reveal::{RevealGroup, RevealItem};
use crate::config::{self, SiteLinks};
use crate::content::IconRef;

#[component]
pub fn Contact() -> impl IntoView {
    let links = config::resolve();
    let mailto = links.mailto();
    let SiteLinks { github_url, linkedin_url, .. } = links;

    view! {
        <section id="contact" class="section section-alt">
            <div class="container">
                <RevealGroup class="contact-content">
                    <RevealItem>
                        <p class="section-label">"Contact"</p>
                        <h2 class="section-title">"Let's Build Something"</h2>
                        <p class="section-description">
                            "Ready to automate your workflow? Let's discuss how I can help transform your manual processes into intelligent, self-running systems."
                        </p>
                    </RevealItem>
                    <RevealItem>
                        <a href=mailto class="btn-primary btn-large">
                            <Icon icon=IconRef::Mail size=20/>
                            "Get in Touch"
                        </a>
                    </RevealItem>
                    <RevealItem class="contact-socials">
                        <a href=github_url target="_blank" rel="noopener noreferrer">
                            <Icon icon=IconRef::Github size=20/>
                            <span>"GitHub"</span>
                        </a>
                        <a href=linkedin_url target="_blank" rel="noopener noreferrer">
                            <Icon icon=IconRef::Linkedin size=20/>
                            <span>"LinkedIn"</span>
                        </a>
                    </RevealItem>
                </RevealGroup>
            </div>
        </section>
    }
}
