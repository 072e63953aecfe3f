use std::{sync::Arc, time::Duration};

use log::debug;
use parking_lot::Mutex;

use stopgap_page::{Document, StyleDeclaration, Target, Transition};

use crate::{Scheduler, Vars};

#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineOptions {
    pub paused: bool,
}

/// A chainable handle scheduling animation steps.
///
/// Every call schedules its step immediately and returns the same handle, so
/// calls can be strung together. There is no sequencing: steps overlap unless
/// their delays say otherwise.
#[derive(Debug, Clone)]
pub struct Timeline {
    document: Document,
    scheduler: Scheduler,
    paused: Arc<Mutex<bool>>,
}

impl Timeline {
    pub fn new(document: Document, scheduler: Scheduler, options: TimelineOptions) -> Self {
        Self {
            document,
            scheduler,
            paused: Arc::new(Mutex::new(options.paused)),
        }
    }

    pub fn paused(&self) -> bool {
        *self.paused.lock()
    }

    /// Animates the resolved elements to the vars.
    pub fn to(&self, target: impl Into<Target>, vars: Vars) -> &Self {
        self.animate(target.into(), vars);
        self
    }

    /// Animates like [`Timeline::to`].
    ///
    /// The distinct starting state a `from` call implies is not applied; only
    /// the target bag is scheduled. Callers get plausible motion, not the
    /// real library's reversed tween.
    pub fn from(&self, target: impl Into<Target>, vars: Vars) -> &Self {
        self.animate(target.into(), vars);
        self
    }

    /// Animates to `to_vars`. The `from` bag is accepted and ignored, like in
    /// [`Timeline::from`].
    pub fn from_to(&self, target: impl Into<Target>, _from_vars: Vars, to_vars: Vars) -> &Self {
        self.animate(target.into(), to_vars);
        self
    }

    /// Immediately assigns the translated declarations, without a delay and
    /// without touching the elements' transition.
    pub fn set(&self, target: impl Into<Target>, vars: Vars) -> &Self {
        let declarations = vars.translate();
        for element in self.document.resolve(&target.into()) {
            element.assign_style(declarations.clone());
        }
        self
    }

    /// Clears the paused flag.
    ///
    /// Steps already scheduled are unaffected; the flag is call-compatible
    /// state, not a suspension mechanism.
    pub fn play(&self) -> &Self {
        *self.paused.lock() = false;
        self
    }

    /// Sets the paused flag. Does not suspend steps already scheduled.
    pub fn pause(&self) -> &Self {
        *self.paused.lock() = true;
        self
    }

    /// Accepted for call compatibility. Does nothing.
    pub fn reverse(&self) -> &Self {
        self
    }

    /// Accepted for call compatibility. Does nothing.
    pub fn restart(&self) -> &Self {
        self
    }

    /// Schedules one animation step: at `delay`, every resolved element gets
    /// a transition over `duration` and the translated declarations; at
    /// `delay + duration`, the completion callback fires exactly once.
    fn animate(&self, target: Target, vars: Vars) {
        let elements = self.document.resolve(&target);
        if elements.is_empty() {
            debug!("animation step without elements, {target:?} resolved to nothing");
            return;
        }

        let duration = seconds(vars.duration_seconds());
        let delay = seconds(vars.delay_seconds());
        let declarations = vars.translate();

        for element in &elements {
            let element = element.clone();
            let declarations = declarations.clone();
            self.scheduler.schedule(delay, move || {
                element.update_style(|style| {
                    style.apply(StyleDeclaration::Transition(Transition::all(duration)));
                    style.assign(declarations);
                });
            });
        }

        if let Some(on_complete) = vars.on_complete {
            self.scheduler.schedule(delay + duration, on_complete);
        }
    }
}

/// Negative and non-finite second values degrade to zero; nothing in the
/// surface is allowed to panic over a bad bag.
fn seconds(value: f64) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::from_secs_f64(value)
    } else {
        Duration::ZERO
    }
}
