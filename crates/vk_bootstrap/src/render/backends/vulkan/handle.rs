//! Scoped ownership of raw Vulkan handles
//!
//! `ScopedHandle` pairs a raw handle with the function that destroys it, so the
//! handle is released exactly once: when it is superseded by a different value
//! or when the wrapper goes out of scope. Handles that need their parent to be
//! destroyed (debug callbacks, surfaces, ...) bind the parent at construction.
//!
//! Declaration order matters for owners holding several wrappers: Rust drops
//! struct fields top to bottom, so children must be declared before parents.

use ash::vk;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A copyable handle type with a distinguished null value
pub trait NullHandle: Copy + PartialEq {
    /// The null handle
    fn null_handle() -> Self;

    /// Whether this is the null handle
    fn is_null_handle(self) -> bool {
        self == Self::null_handle()
    }
}

impl<T: vk::Handle + Copy + PartialEq> NullHandle for T {
    fn null_handle() -> Self {
        T::from_raw(0)
    }
}

type Destroyer<T> = Box<dyn FnMut(T)>;

/// Owns one raw handle and destroys it when superseded or dropped
pub struct ScopedHandle<T: NullHandle> {
    handle: T,
    destroyer: Option<Destroyer<T>>,
}

impl<T: NullHandle> ScopedHandle<T> {
    /// Empty wrapper without a destroy function
    pub fn empty() -> Self {
        Self {
            handle: T::null_handle(),
            destroyer: None,
        }
    }

    /// Wrapper whose handles are released with `destroy(handle)`
    pub fn new(destroy: impl FnMut(T) + 'static) -> Self {
        Self {
            handle: T::null_handle(),
            destroyer: Some(Box::new(destroy)),
        }
    }

    /// Wrapper whose handles are released with `destroy(parent, handle)`
    pub fn with_parent<P>(parent: P, mut destroy: impl FnMut(P, T) + 'static) -> Self
    where
        P: Copy + 'static,
    {
        Self::new(move |handle| destroy(parent, handle))
    }

    /// Current handle value
    pub fn get(&self) -> T {
        self.handle
    }

    /// Whether nothing is currently owned
    pub fn is_null(&self) -> bool {
        self.handle.is_null_handle()
    }

    /// Take ownership of `value`, destroying the previous handle if it differs
    pub fn set(&mut self, value: T) {
        if value == self.handle {
            return;
        }
        self.cleanup();
        self.handle = value;
    }

    /// Writable slot for a creation call to fill in
    ///
    /// The slot starts out null and is committed through [`set`](Self::set)
    /// when it goes out of scope. A creation call that bails out before
    /// writing leaves the slot null, which still releases the previous handle.
    pub fn replace(&mut self) -> HandleSlot<'_, T> {
        HandleSlot {
            pending: T::null_handle(),
            owner: self,
        }
    }

    /// Release the held handle now
    pub fn reset(&mut self) {
        self.set(T::null_handle());
    }

    fn cleanup(&mut self) {
        if self.handle.is_null_handle() {
            return;
        }
        match self.destroyer.as_mut() {
            Some(destroy) => destroy(self.handle),
            None => log::warn!("Dropping a live handle that has no destroy function"),
        }
        self.handle = T::null_handle();
    }
}

impl<T: NullHandle> Default for ScopedHandle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: NullHandle> Drop for ScopedHandle<T> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

impl<T: NullHandle + fmt::Debug> fmt::Debug for ScopedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedHandle")
            .field("handle", &self.handle)
            .field("has_destroyer", &self.destroyer.is_some())
            .finish()
    }
}

/// Pending handle value returned by [`ScopedHandle::replace`]
pub struct HandleSlot<'a, T: NullHandle> {
    pending: T,
    owner: &'a mut ScopedHandle<T>,
}

impl<T: NullHandle> Deref for HandleSlot<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.pending
    }
}

impl<T: NullHandle> DerefMut for HandleSlot<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.pending
    }
}

impl<T: NullHandle> Drop for HandleSlot<'_, T> {
    fn drop(&mut self) {
        self.owner.set(self.pending);
    }
}
