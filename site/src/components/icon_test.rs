use super::*;

const ALL: [IconRef; 10] = [
    IconRef::Code2,
    IconRef::Terminal,
    IconRef::Zap,
    IconRef::Github,
    IconRef::Linkedin,
    IconRef::Mail,
    IconRef::ChevronDown,
    IconRef::Menu,
    IconRef::Close,
    IconRef::ArrowUpRight,
];

#[test]
fn every_icon_has_path_data() {
    for icon in ALL {
        let paths = icon_paths(icon);
        assert!(!paths.is_empty(), "{icon:?} has no paths");
        assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])), "{icon:?} path must start with a move");
    }
}

#[test]
fn menu_and_close_differ() {
    assert_ne!(icon_paths(IconRef::Menu), icon_paths(IconRef::Close));
}
