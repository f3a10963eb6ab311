//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single route. The page only fixes section order and
//! delegates everything else to `components`.

pub mod home;
