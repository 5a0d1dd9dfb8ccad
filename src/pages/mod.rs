//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its rendering; async orchestration that touches the
//! network, storage, or session is split into a sibling `_flow` module so it
//! can run without a DOM.

pub mod login;
pub mod login_flow;
