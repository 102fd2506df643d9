//! Submission state machine.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::TransitionError;

/// Where a submit currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Failed)
                | (Validating, Sending)
                | (Sending, Succeeded)
                | (Sending, Failed)
                | (Sending, Idle)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    /// True while a submit is being handled.
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

type Listener = Arc<dyn Fn(SubmissionState, SubmissionState) + Send + Sync>;

/// Current state plus transition observers.
#[derive(Default)]
pub struct Lifecycle {
    state: RwLock<SubmissionState>,
    listeners: RwLock<Vec<Listener>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> SubmissionState {
        self.state
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    /// Register a callback run after every transition as `(from, to)`.
    pub fn on_transition<F>(&self, f: F)
    where
        F: Fn(SubmissionState, SubmissionState) + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(f));
    }

    /// Move to `next`, rejecting illegal transitions.
    pub fn transition(&self, next: SubmissionState) -> Result<(), TransitionError> {
        let from = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let from = *guard;
            if !from.can_transition_to(next) {
                return Err(TransitionError { from, to: next });
            }
            *guard = next;
            from
        };
        log::debug!("submission {from:?} -> {next:?}");
        self.notify(from, next);
        Ok(())
    }

    /// Atomically claim the state machine for a new submit.
    ///
    /// Returns the current state when it is not idle.
    pub fn begin(&self) -> Result<(), SubmissionState> {
        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if guard.is_busy() {
                return Err(*guard);
            }
            *guard = SubmissionState::Validating;
        }
        log::debug!("submission Idle -> Validating");
        self.notify(SubmissionState::Idle, SubmissionState::Validating);
        Ok(())
    }

    fn notify(&self, from: SubmissionState, to: SubmissionState) {
        // Listeners may register more listeners, so none run under the lock.
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(from, to);
        }
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use SubmissionState::*;

    #[test]
    fn test_happy_path() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), Idle);
        for next in [Validating, Sending, Succeeded, Idle] {
            lifecycle.transition(next).unwrap();
        }
        assert_eq!(lifecycle.state(), Idle);
    }

    #[test]
    fn test_illegal_transition_leaves_state() {
        let lifecycle = Lifecycle::new();
        let err = lifecycle.transition(Sending).unwrap_err();
        assert_eq!(err, TransitionError { from: Idle, to: Sending });
        assert_eq!(lifecycle.state(), Idle);
    }

    #[test]
    fn test_begin_rejects_when_busy() {
        let lifecycle = Lifecycle::new();
        assert!(lifecycle.begin().is_ok());
        lifecycle.transition(Sending).unwrap();
        assert_eq!(lifecycle.begin(), Err(Sending));
        assert_eq!(lifecycle.state(), Sending);
    }

    #[test]
    fn test_listeners_see_every_transition() {
        let lifecycle = Lifecycle::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        lifecycle.on_transition(move |from, to| sink.lock().unwrap().push((from, to)));

        lifecycle.begin().unwrap();
        lifecycle.transition(Failed).unwrap();
        lifecycle.transition(Idle).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(Idle, Validating), (Validating, Failed), (Failed, Idle)]
        );
    }

    #[test]
    fn test_listener_registered_from_listener() {
        let lifecycle = Arc::new(Lifecycle::new());
        let late = Arc::new(Mutex::new(Vec::new()));

        let inner = Arc::clone(&lifecycle);
        let sink = Arc::clone(&late);
        lifecycle.on_transition(move |_, to| {
            if to == Validating {
                let sink = Arc::clone(&sink);
                inner.on_transition(move |from, to| sink.lock().unwrap().push((from, to)));
            }
        });

        lifecycle.begin().unwrap();
        lifecycle.transition(Failed).unwrap();
        assert_eq!(*late.lock().unwrap(), vec![(Validating, Failed)]);
    }

    #[test]
    fn test_poisoned_listeners_still_run() {
        let lifecycle = Arc::new(Lifecycle::new());
        let poisoner = Arc::clone(&lifecycle);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.listeners.write().unwrap();
            panic!("poison the listener list");
        })
        .join();
        assert!(lifecycle.listeners.is_poisoned());

        let seen = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        lifecycle.on_transition(move |_, _| *sink.lock().unwrap() += 1);
        lifecycle.begin().unwrap();
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        assert!(Sending.can_transition_to(Idle));
        assert!(!Validating.can_transition_to(Idle));
        assert!(!Succeeded.can_transition_to(Failed));
        assert!(!Idle.is_busy());
        assert!(Sending.is_busy());
    }
}
