use std::{collections::HashMap, sync::Arc};

use log::debug;
use parking_lot::Mutex;

use stopgap_geometry::Point;
use stopgap_page::{
    Cursor, DefaultAction, Document, Element, ElementId, PointerEvent, StyleDeclaration, Target,
    TransformOp,
};

/// Accepted for call compatibility. Constraints, inertia, and the other knobs
/// of the real surface are not emulated; nothing is read from this.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragOptions {}

/// The control handle [`Draggable::create`] returns.
///
/// A stub: callers expect to hold one and call lifecycle methods on it, none
/// of which do anything here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragHandle {}

impl DragHandle {
    pub fn disable(&self) {}

    pub fn enable(&self) {}

    pub fn kill(&self) {}
}

/// Makes elements of a document draggable.
///
/// One session per registered element; sessions on different elements are
/// independent and live until the `Draggable` is dropped.
#[derive(Debug, Clone)]
pub struct Draggable {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    document: Document,
    sessions: HashMap<ElementId, DragSession>,
}

#[derive(Debug)]
struct DragSession {
    element: Element,
    dragging: bool,
    /// Where the pointer grabbed, relative to the element's translation at
    /// that moment. The translation while dragging is `position - grab`.
    grab: Point,
}

impl DragSession {
    fn new(element: Element) -> Self {
        Self {
            element,
            dragging: false,
            grab: Point::ZERO,
        }
    }
}

impl Draggable {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                document,
                sessions: Default::default(),
            })),
        }
    }

    /// Registers a drag session for every resolved element.
    ///
    /// Registering an element again resets its session instead of stacking a
    /// second one.
    pub fn create(&self, target: impl Into<Target>, _options: DragOptions) -> DragHandle {
        let target = target.into();
        let mut inner = self.inner.lock();
        for element in inner.document.resolve(&target) {
            let id = element.id();
            if inner.sessions.insert(id, DragSession::new(element)).is_some() {
                debug!("reset the drag session of element {}", *id);
            }
        }
        DragHandle::default()
    }

    /// Routes one pointer event through the registered sessions.
    ///
    /// The host must suppress its default behavior when this says so,
    /// otherwise native drag handling fights the transform updates.
    pub fn dispatch(&self, event: &PointerEvent) -> DefaultAction {
        let mut inner = self.inner.lock();
        match *event {
            PointerEvent::Down { target, position } => {
                if let Some(session) = inner.sessions.get_mut(&target) {
                    session.dragging = true;
                    session.grab = position - session.element.style().translation();
                    session
                        .element
                        .assign_style([StyleDeclaration::Cursor(Cursor::Grabbing)]);
                }
                DefaultAction::Proceed
            }
            PointerEvent::Move { position } => {
                let mut dragged = false;
                for session in inner.sessions.values_mut().filter(|s| s.dragging) {
                    let offset = position - session.grab;
                    session
                        .element
                        .assign_style([StyleDeclaration::Transform(vec![TransformOp::Translate(
                            offset,
                        )])]);
                    dragged = true;
                }
                if dragged {
                    DefaultAction::Suppress
                } else {
                    DefaultAction::Proceed
                }
            }
            PointerEvent::Up { .. } => {
                for session in inner.sessions.values_mut().filter(|s| s.dragging) {
                    session.dragging = false;
                    session
                        .element
                        .assign_style([StyleDeclaration::Cursor(Cursor::Grab)]);
                }
                DefaultAction::Proceed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use stopgap_geometry::{Point, Vector};
    use stopgap_page::{Cursor, DefaultAction, Document, Element, PointerEvent};

    use super::{DragOptions, Draggable};

    fn drag(draggable: &Draggable, element: &Element, from: Point, to: Point) {
        let down = draggable.dispatch(&PointerEvent::Down {
            target: element.id(),
            position: from,
        });
        assert_eq!(down, DefaultAction::Proceed);
        let moved = draggable.dispatch(&PointerEvent::Move { position: to });
        assert_eq!(moved, DefaultAction::Suppress);
        let up = draggable.dispatch(&PointerEvent::Up { position: to });
        assert_eq!(up, DefaultAction::Proceed);
    }

    #[test]
    fn drags_by_the_pointer_movement() {
        let document = Document::new();
        let element = document.create_element("div").with_class("card");
        let draggable = Draggable::new(document);
        draggable.create(".card", DragOptions::default());

        drag(
            &draggable,
            &element,
            Point::new(10.0, 10.0),
            Point::new(40.0, 25.0),
        );

        assert_eq!(element.style().translation(), Vector::new(30.0, 15.0));
        assert_eq!(element.style().cursor, Some(Cursor::Grab));
    }

    #[test]
    fn second_drag_continues_from_the_current_translation() {
        let document = Document::new();
        let element = document.create_element("div");
        let draggable = Draggable::new(document);
        draggable.create(&element, DragOptions::default());

        drag(
            &draggable,
            &element,
            Point::new(0.0, 0.0),
            Point::new(30.0, 15.0),
        );
        drag(
            &draggable,
            &element,
            Point::new(100.0, 100.0),
            Point::new(110.0, 105.0),
        );

        assert_eq!(element.style().translation(), Vector::new(40.0, 20.0));
    }

    #[test]
    fn move_without_down_changes_nothing() {
        let document = Document::new();
        let element = document.create_element("div");
        let draggable = Draggable::new(document);
        draggable.create(&element, DragOptions::default());

        let action = draggable.dispatch(&PointerEvent::Move {
            position: Point::new(50.0, 50.0),
        });

        assert_eq!(action, DefaultAction::Proceed);
        assert_eq!(element.style().transform, None);
    }

    #[test]
    fn recreating_does_not_stack_sessions() {
        let document = Document::new();
        let element = document.create_element("div");
        let draggable = Draggable::new(document);
        draggable.create(&element, DragOptions::default());
        draggable.create(&element, DragOptions::default());

        drag(
            &draggable,
            &element,
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
        );

        assert_eq!(element.style().translation(), Vector::new(10.0, 10.0));
    }

    #[test]
    fn sessions_on_different_elements_are_independent() {
        let document = Document::new();
        let first = document.create_element("div").with_class("card");
        let second = document.create_element("div").with_class("card");
        let draggable = Draggable::new(document);
        draggable.create(".card", DragOptions::default());

        drag(
            &draggable,
            &first,
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
        );

        assert_eq!(first.style().translation(), Vector::new(5.0, 5.0));
        assert_eq!(second.style().transform, None);
    }

    #[test]
    fn unmatched_target_is_a_no_op() {
        let document = Document::new();
        let draggable = Draggable::new(document);
        let handle = draggable.create("#missing", DragOptions::default());

        handle.disable();
        handle.enable();
        handle.kill();

        let action = draggable.dispatch(&PointerEvent::Move {
            position: Point::new(1.0, 1.0),
        });
        assert_eq!(action, DefaultAction::Proceed);
    }
}
