//! Section and chrome components for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render the static content tables through [`reveal`] groups, which
//! own the per-section "revealed" flag and the staggered entrance. The only
//! page-wide inputs they read from context are the viewport bus and the
//! resolved site links.

pub mod about;
pub mod contact;
pub mod divider;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod skills;
