//! Foreground-resume lifecycle contracts and in-memory adapters.
//!
//! After an external-browser launch the application loses the foreground; the
//! web layer subscribes here to learn when the user returns (typically to
//! re-check session state after a sign-in flow).

use std::{cell::RefCell, fmt, rc::Rc};

/// Callback invoked when the application returns to the foreground.
pub type ResumeListener = Rc<dyn Fn()>;

/// Host service for foreground-resume notifications.
pub trait ResumeService {
    /// Registers `listener` for resume events.
    ///
    /// The registration lives until the returned subscription is dropped.
    fn subscribe(&self, listener: ResumeListener) -> ResumeSubscription;
}

/// Active resume-listener registration; dropping it detaches the listener.
pub struct ResumeSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ResumeSubscription {
    /// Wraps a detach action to run when the subscription is dropped.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Subscription with no detach action, for hosts that never fire.
    pub fn inert() -> Self {
        Self { detach: None }
    }
}

impl fmt::Debug for ResumeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeSubscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

impl Drop for ResumeSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op resume service that never fires.
pub struct NoopResumeService;

impl ResumeService for NoopResumeService {
    fn subscribe(&self, _listener: ResumeListener) -> ResumeSubscription {
        ResumeSubscription::inert()
    }
}

#[derive(Default)]
struct ResumeState {
    next_id: u64,
    listeners: Vec<(u64, ResumeListener)>,
}

/// In-memory resume service fired manually from tests or headless hosts.
#[derive(Clone, Default)]
pub struct MemoryResumeService {
    inner: Rc<RefCell<ResumeState>>,
}

impl MemoryResumeService {
    /// Invokes every registered listener once.
    pub fn emit_resume(&self) {
        let listeners: Vec<ResumeListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for MemoryResumeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryResumeService")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResumeService for MemoryResumeService {
    fn subscribe(&self, listener: ResumeListener) -> ResumeSubscription {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let inner = Rc::clone(&self.inner);
        ResumeSubscription::new(move || {
            inner
                .borrow_mut()
                .listeners
                .retain(|(listener_id, _)| *listener_id != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn subscribed_listener_fires_on_resume() {
        let service = MemoryResumeService::default();
        let fired = Rc::new(Cell::new(0u32));

        let observed = Rc::clone(&fired);
        let subscription = service.subscribe(Rc::new(move || {
            observed.set(observed.get() + 1);
        }));

        service.emit_resume();
        service.emit_resume();
        assert_eq!(fired.get(), 2);
        drop(subscription);
    }

    #[test]
    fn dropping_the_subscription_detaches_the_listener() {
        let service = MemoryResumeService::default();
        let fired = Rc::new(Cell::new(0u32));

        let observed = Rc::clone(&fired);
        let subscription = service.subscribe(Rc::new(move || {
            observed.set(observed.get() + 1);
        }));
        assert_eq!(service.listener_count(), 1);

        drop(subscription);
        assert_eq!(service.listener_count(), 0);
        service.emit_resume();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn noop_service_registrations_are_inert() {
        let service = NoopResumeService;
        let subscription = service.subscribe(Rc::new(|| {}));
        drop(subscription);
    }
}
