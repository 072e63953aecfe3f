//! The fallback surface callers see when the real animation library is
//! unavailable.
//!
//! The design goal is call compatibility, not fidelity: every entry point of
//! the commonly used subset exists, never panics over its inputs, and
//! produces plausible motion through the page's style transitions. Known gaps
//! (no sequencing, no easing, no suspension of scheduled steps) are noted on
//! the methods they affect.

use std::{sync::Arc, time::Instant};

use log::{debug, info};

use stopgap_animation::{Scheduler, Timeline, TimelineOptions, Vars};
use stopgap_drag::Draggable;
use stopgap_page::{Document, Target};

mod plugin;

pub use plugin::*;

/// The facade of the emulated animation library.
///
/// Constructed explicitly over a document instead of being installed as a
/// side effect of loading, so hosts control its lifecycle and tests can hold
/// isolated instances.
#[derive(Debug)]
pub struct Shim {
    document: Document,
    scheduler: Scheduler,
    draggable: Draggable,
}

impl Shim {
    pub fn new(document: Document) -> Self {
        let scheduler = Scheduler::new();
        let draggable = Draggable::new(document.clone());
        // The one notice confirming the fallback took over.
        info!("animation fallback installed");
        Self {
            document,
            scheduler,
            draggable,
        }
    }

    /// Constructs the shim as a shared handle, ready to hand out to callers.
    pub fn install(document: Document) -> Arc<Self> {
        Self::new(document).into()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn timeline(&self, options: TimelineOptions) -> Timeline {
        Timeline::new(self.document.clone(), self.scheduler.clone(), options)
    }

    /// Animates through a fresh one-off timeline and returns it.
    pub fn to(&self, target: impl Into<Target>, vars: Vars) -> Timeline {
        let timeline = self.timeline(Default::default());
        timeline.to(target, vars);
        timeline
    }

    /// See [`Timeline::from`]: the starting state is not applied.
    pub fn from(&self, target: impl Into<Target>, vars: Vars) -> Timeline {
        let timeline = self.timeline(Default::default());
        timeline.from(target, vars);
        timeline
    }

    pub fn from_to(
        &self,
        target: impl Into<Target>,
        from_vars: Vars,
        to_vars: Vars,
    ) -> Timeline {
        let timeline = self.timeline(Default::default());
        timeline.from_to(target, from_vars, to_vars);
        timeline
    }

    /// Immediately assigns the translated declarations.
    pub fn set(&self, target: impl Into<Target>, vars: Vars) -> Timeline {
        let timeline = self.timeline(Default::default());
        timeline.set(target, vars);
        timeline
    }

    /// Accepted for call compatibility. No plugin changes behavior.
    pub fn register_plugin(&self, plugin: &dyn Plugin) -> &Self {
        debug!("ignoring registration of plugin {}", plugin.name());
        self
    }

    /// The drag factory sharing this shim's document.
    pub fn draggable(&self) -> &Draggable {
        &self.draggable
    }

    /// Drives deferred animation steps. The host calls this from its frame or
    /// event loop with the current instant.
    pub fn tick(&self, now: Instant) {
        self.scheduler.tick(now)
    }

    /// Whether animation steps are still waiting to fire.
    pub fn has_pending_work(&self) -> bool {
        self.scheduler.has_pending()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::{Duration, Instant},
    };

    use stopgap_drag::DragOptions;
    use stopgap_geometry::{Point, Vector};
    use stopgap_page::{Document, PointerEvent, TransformOp, Transition};

    use super::{MotionPathPlugin, Shim, TimelineOptions, Vars};

    fn shim() -> (Document, Shim, Instant) {
        let document = Document::new();
        let shim = Shim::new(document.clone());
        let start = Instant::now();
        shim.tick(start);
        (document, shim, start)
    }

    #[test]
    fn surface_is_callable_without_matching_elements() {
        let (_, shim, start) = shim();

        shim.to("#missing", Vars::new().x(100.0))
            .from(".nothing", Vars::new().opacity(0.0))
            .set("*", Vars::new().scale(2.0))
            .play()
            .pause()
            .reverse()
            .restart();
        shim.from_to("#a", Vars::new(), Vars::new().y(10.0));
        shim.register_plugin(&MotionPathPlugin);
        shim.draggable().create("#missing", DragOptions::default());

        shim.tick(start + Duration::from_secs(5));
        assert!(!shim.has_pending_work());
    }

    #[test]
    fn set_is_immediate() {
        let (document, shim, _) = shim();
        let element = document.create_element("div").with_id("banner");

        shim.set("#banner", Vars::new().opacity(0.5));

        let style = element.style();
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.transition, None);
    }

    #[test]
    fn to_translates_after_the_duration_timer() {
        let (document, shim, start) = shim();
        let element = document.create_element("div").with_class("card");

        shim.to(".card", Vars::new().x(100.0).duration(0.5));

        shim.tick(start + Duration::from_millis(500));
        let style = element.style();
        assert!(
            style
                .transform
                .as_deref()
                .unwrap()
                .contains(&TransformOp::TranslateX(100.0))
        );
        assert_eq!(
            style.transition,
            Some(Transition::all(Duration::from_millis(500)))
        );
    }

    #[test]
    fn completion_callback_fires_exactly_once() {
        let (document, shim, start) = shim();
        document.create_element("div").with_id("fader");

        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        shim.to(
            "#fader",
            Vars::new().opacity(0.0).duration(1.0).on_complete(move || {
                counted.fetch_add(1, Ordering::SeqCst);
            }),
        );

        shim.tick(start + Duration::from_millis(999));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        shim.tick(start + Duration::from_millis(1001));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        shim.tick(start + Duration::from_secs(60));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unrecognized_keys_leave_the_style_untouched() {
        let (document, shim, _) = shim();
        let element = document.create_element("div");

        shim.set(&element, Vars::new().value("foo", 1.0));

        assert_eq!(element.style(), Default::default());
    }

    #[test]
    fn dragging_translates_by_the_pointer_movement() {
        let (document, shim, _) = shim();
        let element = document.create_element("div").with_class("card");
        shim.draggable().create(".card", DragOptions::default());

        let _ = shim.draggable().dispatch(&PointerEvent::Down {
            target: element.id(),
            position: Point::new(10.0, 20.0),
        });
        let _ = shim.draggable().dispatch(&PointerEvent::Move {
            position: Point::new(60.0, 45.0),
        });
        let _ = shim.draggable().dispatch(&PointerEvent::Up {
            position: Point::new(60.0, 45.0),
        });

        assert_eq!(element.style().translation(), Vector::new(50.0, 25.0));
    }

    #[test]
    fn paused_timeline_still_schedules() {
        let (document, shim, start) = shim();
        let element = document.create_element("div");

        let timeline = shim.timeline(TimelineOptions { paused: true });
        timeline.to(&element, Vars::new().opacity(0.0).duration(0.1));
        assert!(timeline.paused());

        shim.tick(start + Duration::from_millis(100));
        assert_eq!(element.style().opacity, Some(0.0));
    }
}
