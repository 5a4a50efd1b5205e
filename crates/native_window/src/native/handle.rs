//! Typed holder for a single native handle

use slotmap::Key;

use crate::error::{WindowError, WindowResult};

/// Owns exactly one native key
///
/// The holder tracks ownership only: releasing hands the key back to the
/// wrapping type, which performs the native free. A released holder refuses
/// every further access.
#[derive(Debug)]
pub struct NativeHandle<K: Key> {
    key: Option<K>,
    kind: &'static str,
}

impl<K: Key> NativeHandle<K> {
    /// Take ownership of a native key
    ///
    /// `kind` names the owning object in error messages. The null sentinel is
    /// rejected; callers check creation results before wrapping them.
    pub fn new(key: K, kind: &'static str) -> WindowResult<Self> {
        if key.is_null() {
            return Err(WindowError::InvalidArgument(format!("{kind} handle is null")));
        }
        Ok(Self { key: Some(key), kind })
    }

    /// The owned key
    ///
    /// # Panics
    /// Panics if the handle has been released. Use [`Self::try_get`] where a
    /// released handle is an expected state.
    pub fn get(&self) -> K {
        match self.key {
            Some(key) => key,
            None => panic!("use of released {} handle", self.kind),
        }
    }

    /// The owned key, or `AlreadyDisposed` after release
    pub fn try_get(&self) -> WindowResult<K> {
        self.key.ok_or(WindowError::AlreadyDisposed(self.kind))
    }

    /// Give up ownership of the key; fails on the second call
    pub fn release(&mut self) -> WindowResult<K> {
        self.key.take().ok_or(WindowError::AlreadyDisposed(self.kind))
    }

    /// Whether [`Self::release`] has been called
    pub const fn is_released(&self) -> bool {
        self.key.is_none()
    }

    /// Name of the owning object
    pub const fn kind(&self) -> &'static str {
        self.kind
    }
}
