//! Browser bridges that feed the `motion` engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The engine is clock- and DOM-agnostic. These helpers supply the two
//! inputs it needs from the page: a frame clock (`frame_loop`) and viewport
//! geometry (`viewport`). Outside the `hydrate` feature both degrade to
//! inert no-ops so the same components render on the server.

pub mod frame_loop;
pub mod viewport;
