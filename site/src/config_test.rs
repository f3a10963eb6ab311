use super::*;

#[test]
fn defaults_are_sample_links() {
    let links = SiteLinks::default();
    assert_eq!(links.github_url, "https://github.com/seeyaa77");
    assert_eq!(links.linkedin_url, "https://linkedin.com");
    assert_eq!(links.email, "contact@example.com");
}

#[test]
fn mailto_prefixes_address() {
    let links = SiteLinks { email: "me@raffli.dev".to_owned(), ..SiteLinks::default() };
    assert_eq!(links.mailto(), "mailto:me@raffli.dev");
}

#[test]
fn embed_escapes_angle_brackets() {
    let links = SiteLinks { github_url: "https://x.test/</script><b>".to_owned(), ..SiteLinks::default() };
    let json = embed_json(&links).unwrap();
    assert!(!json.contains('<'));
    assert!(json.contains("\\u003c/script>"));
}

#[test]
fn embedded_json_parses_back() {
    let links = SiteLinks {
        github_url: "https://github.com/someone".to_owned(),
        linkedin_url: "https://linkedin.com/in/someone".to_owned(),
        email: "a<b@example.com".to_owned(),
    };
    let json = embed_json(&links).unwrap();
    assert_eq!(parse_embedded(&json).unwrap(), links);
}

#[test]
fn parse_rejects_partial_object() {
    assert!(parse_embedded(r#"{"github_url":"https://x"}"#).is_err());
    assert!(parse_embedded("not json").is_err());
}

#[test]
fn read_embedded_is_none_outside_browser() {
    assert!(read_embedded().is_none());
}

#[test]
fn resolve_falls_back_to_defaults_without_context() {
    let owner = leptos::prelude::Owner::new();
    owner.with(|| assert_eq!(resolve(), SiteLinks::default()));
}

#[test]
fn resolve_prefers_context() {
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        let links = SiteLinks { email: "ctx@example.com".to_owned(), ..SiteLinks::default() };
        leptos::prelude::provide_context(links.clone());
        assert_eq!(resolve(), links);
    });
}
