use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use log::trace;
use parking_lot::Mutex;

type Action = Box<dyn FnOnce() + Send>;

/// Deferred, fire-and-forget work.
///
/// The embedding host drives time by calling [`Scheduler::tick`] with the
/// current instant. Scheduling returns no handle: once an action is in, it
/// cannot be cancelled or suspended, only run.
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    /// Lazily initialized on first use, advanced by `tick`, never moved
    /// backwards.
    current: Option<Instant>,
    pending: Vec<Pending>,
}

struct Pending {
    due: Instant,
    action: Action,
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.inner.lock().pending.len())
            .finish()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Default::default()
    }

    /// Schedules an action to run `delay` after the current instant.
    pub fn schedule(&self, delay: Duration, action: impl FnOnce() + Send + 'static) {
        let mut inner = self.inner.lock();
        let due = inner.current_time() + delay;
        trace!("scheduling action due in {delay:?}");
        inner.pending.push(Pending {
            due,
            action: Box::new(action),
        });
    }

    /// Advances time to `now` and runs every action due by then.
    ///
    /// Actions run outside the scheduler's lock and may schedule further
    /// actions; those run in the same tick when they are already due, so a
    /// large jump forward drains whole chains.
    pub fn tick(&self, now: Instant) {
        loop {
            let due = {
                let mut inner = self.inner.lock();
                let now = inner.current.map_or(now, |current| current.max(now));
                inner.current = Some(now);

                let mut due = Vec::new();
                let mut pending = Vec::new();
                for entry in inner.pending.drain(..) {
                    if entry.due <= now {
                        due.push(entry.action);
                    } else {
                        pending.push(entry);
                    }
                }
                inner.pending = pending;
                due
            };

            if due.is_empty() {
                return;
            }
            trace!("running {} due actions", due.len());
            for action in due {
                action()
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.lock().pending.is_empty()
    }
}

impl Inner {
    fn current_time(&mut self) -> Instant {
        *self.current.get_or_insert_with(Instant::now)
    }
}
