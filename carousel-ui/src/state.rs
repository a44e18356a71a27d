//! Shared handle for controller state.
//!
//! A [`State`] lets the host hand the same controller to its input handlers
//! and its frame loop. Access goes through closures so no guard escapes the
//! call.
//!
//! ```
//! use carousel_ui::State;
//!
//! let counter = State::new(0usize);
//! let in_handler = counter.clone();
//! in_handler.with_mut(|value| *value += 1);
//! assert_eq!(counter.get(), 1);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

/// Cloneable handle to a value behind a read-write lock.
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for State<T> {}

impl<T> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("ptr", &Arc::as_ptr(&self.inner))
            .finish()
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> State<T> {
    /// Wraps `value` in a new shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_value() {
        let state = State::new(vec![1, 2]);
        let other = state.clone();
        other.with_mut(|v| v.push(3));
        assert_eq!(state.get(), vec![1, 2, 3]);
        assert_eq!(state, other);
        assert_ne!(state, State::new(vec![1, 2, 3]));
    }

    #[test]
    fn set_replaces_value() {
        let state = State::<u8>::default();
        state.set(9);
        assert_eq!(state.with(|v| *v), 9);
    }
}
