use stopgap_geometry::Point;

use crate::ElementId;

/// Pointer input as the embedding host reports it.
///
/// `Down` carries the element the host hit-tested. Movement and release are
/// document level, because drag consumers track them past the element's
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { target: ElementId, position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }
}

/// What the host should do with its default behavior after dispatching an
/// event to a consumer.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DefaultAction {
    Proceed,
    /// A consumer handled the event; the host's default (text selection,
    /// native drag) must not run.
    Suppress,
}
