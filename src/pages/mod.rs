//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page binds DOM events to the handlers in `auth::handlers`; the pages
//! themselves hold no state.

pub mod login;
pub mod portals;
