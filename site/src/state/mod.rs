//! Page-level UI state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State structs here are plain data with pure transition methods. Components
//! wrap them in `RwSignal`s and call the methods from event handlers, which
//! keeps every decision testable without a DOM.

pub mod nav;
