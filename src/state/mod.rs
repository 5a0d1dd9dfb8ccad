//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in `RwSignal`s provided through context; views subscribe by
//! reading the signal and re-render when a transition updates it.

pub mod session;
