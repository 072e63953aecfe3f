//! Free 2D dragging of document elements.
//!
//! Drag state is an explicit map from element identity to its session, owned
//! here; the pointer listeners of the emulated surface become one `dispatch`
//! entry point the host feeds events into.

mod draggable;

pub use draggable::*;
