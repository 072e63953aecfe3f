//! The page model the animation surface writes to.
//!
//! The real target of the emulated API is a tree of styled elements owned by
//! the embedding host. This crate models the part of it the fallback touches:
//! elements with inline styles, a document to resolve selectors against, and
//! pointer events.

mod document;
mod element;
mod event;
mod id;
mod selector;
mod style;

pub use document::*;
pub use element::*;
pub use event::*;
pub use id::*;
pub use selector::*;
pub use style::*;
