//! Scoped suppression of change notifications.
//!
//! Programmatic field updates fire the same notifications as user edits. While
//! a [`SuppressGuard`] is alive those notifications are ignored; dropping the
//! guard restores the previous state on every exit path, unwinding included.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ChangeSuppression {
    active: Rc<Cell<bool>>,
}

impl ChangeSuppression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Suppress notifications until the returned guard is dropped.
    ///
    /// Guards nest: the innermost drop restores the outer state.
    #[must_use = "notifications are only suppressed while the guard is alive"]
    pub fn suppress(&self) -> SuppressGuard {
        let previous = self.active.replace(true);
        SuppressGuard {
            active: Rc::clone(&self.active),
            previous,
        }
    }
}

#[derive(Debug)]
pub struct SuppressGuard {
    active: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for SuppressGuard {
    fn drop(&mut self) {
        self.active.set(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_guard_scopes_suppression() {
        let suppression = ChangeSuppression::new();
        assert!(!suppression.is_active());
        {
            let _guard = suppression.suppress();
            assert!(suppression.is_active());
        }
        assert!(!suppression.is_active());
    }

    #[test]
    fn test_nested_guards_restore_outer_state() {
        let suppression = ChangeSuppression::new();
        let outer = suppression.suppress();
        {
            let _inner = suppression.suppress();
            assert!(suppression.is_active());
        }
        assert!(suppression.is_active());
        drop(outer);
        assert!(!suppression.is_active());
    }

    #[test]
    fn test_guard_released_on_panic() {
        let suppression = ChangeSuppression::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = suppression.suppress();
            panic!("load failed");
        }));
        assert!(result.is_err());
        assert!(!suppression.is_active());
    }
}
