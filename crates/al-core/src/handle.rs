//! `Handle<T>`: a shared, read-only, optionally-empty reference.
//!
//! Calendar grids keep a `Handle` to the special-day store they were built
//! from. Many grids (e.g. the twelve months of a year) share one store, and
//! the store outlives none of them in particular, so the handle is backed by
//! an `Arc` and cloning it is cheap.

use std::sync::Arc;

/// A shared, optionally-empty reference to a value of type `T`.
///
/// The handle is read-only: rebuilding the underlying value means creating a
/// new handle.
pub struct Handle<T> {
    inner: Option<Arc<T>>,
}

impl<T> Handle<T> {
    /// Create a non-empty handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(value)),
        }
    }

    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: Some(arc) }
    }

    /// Create an empty handle.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// Return `true` if the handle holds no value.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrow the contained value, or `None` if the handle is empty.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Return `true` if both handles point at the same allocation.
    ///
    /// Two empty handles are considered the same.
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Manual impl: cloning the handle must not require `T: Clone`.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Handle<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(v) => write!(f, "Handle({:?})", v),
            None => write!(f, "Handle(empty)"),
        }
    }
}
