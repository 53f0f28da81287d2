//! Ordered, duplicate-free callback storage for a single event.
//!
//! This module provides [`Channel`], which owns the callbacks attached to one event
//! and fans an invocation out to all of them.
//!
//! # Ordering
//!
//! Callbacks are kept in insertion order of their first occurrence, with one twist
//! that callers can observe:
//!
//! - Adding a **single** callback appends it (or does nothing if it is present).
//! - Adding a **sequence** places the sequence ahead of the existing callbacks and
//!   then drops repeats, keeping each callback's first occurrence.
//!
//! ```rust
//! use eventuality::{Callback, Channel};
//!
//! let f: Callback<()> = Callback::named("f", |_| {});
//! let g: Callback<()> = Callback::named("g", |_| {});
//! let h: Callback<()> = Callback::named("h", |_| {});
//!
//! let mut channel: Channel<()> = Channel::with_callbacks(&f)?;
//! channel.add([g.clone(), h.clone()])?;
//!
//! let order: Vec<_> = channel.iter().map(Callback::label).collect();
//! assert_eq!(order, ["g", "h", "f"]);
//! # Ok::<(), eventuality::Error>(())
//! ```
//!
//! # Invocation
//!
//! [`call()`](Channel::call) runs every callback in stored order on the caller's
//! thread. The first callback that fails stops the fan-out and its error is handed
//! back unchanged; callbacks after it do not run.
//!
//! # Thread Safety
//!
//! `Channel` has no internal locking. Mutation takes `&mut self`; sharing one channel
//! between threads that mutate it requires a lock owned by the caller.

use std::{collections::HashSet, fmt};

use log::{debug, trace};

use crate::{
    callback::{BoxError, Callback},
    error::{Error, Result},
    handlers::Handlers,
};

/// The callbacks attached to one event.
pub struct Channel<A> {
    /// Registered callbacks, unique by identity.
    callbacks: Vec<Callback<A>>,
}

impl<A> Channel<A> {
    /// Creates a channel with no callbacks.
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Creates a channel seeded with `callbacks`, dropping repeats in first-seen order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCallback`] if any callback is no longer callable.
    pub fn with_callbacks(callbacks: impl Into<Handlers<A>>) -> Result<Self> {
        let handlers = callbacks.into();
        ensure_callable(&handlers)?;

        let mut callbacks = handlers.into_vec();
        dedup(&mut callbacks);
        Ok(Self { callbacks })
    }

    /// Attaches one callback or a sequence of callbacks.
    ///
    /// A single callback is appended unless already present. A sequence is merged
    /// ahead of the current callbacks and the result is deduplicated, keeping first
    /// occurrences; see the [module docs](self) for the resulting order.
    ///
    /// Nothing is changed if any callback fails validation.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCallback`] naming the first callback that is not callable.
    pub fn add(&mut self, handlers: impl Into<Handlers<A>>) -> Result<&mut Self> {
        let handlers = handlers.into();
        ensure_callable(&handlers)?;

        match handlers {
            Handlers::One(callback) => {
                if self.contains(&callback) {
                    debug!(
                        "Callback `{}` is already registered, skipping",
                        callback.label()
                    );
                } else {
                    self.callbacks.push(callback);
                }
            }
            Handlers::Many(mut merged) => {
                let before = self.callbacks.len();
                merged.append(&mut self.callbacks);
                dedup(&mut merged);
                debug!(
                    "Merged callback sequence: {} -> {} callbacks",
                    before,
                    merged.len()
                );
                self.callbacks = merged;
            }
        }
        Ok(self)
    }

    /// Detaches one callback or each callback of a sequence, in order.
    ///
    /// Removals are applied one at a time: when a sequence hits a missing callback,
    /// the callbacks before it stay removed.
    ///
    /// # Errors
    ///
    /// [`Error::CallbackNotFound`] naming the first callback that is not registered.
    pub fn remove(&mut self, handlers: impl Into<Handlers<A>>) -> Result<&mut Self> {
        for callback in handlers.into().into_vec() {
            let index = self
                .position(&callback)
                .ok_or_else(|| Error::CallbackNotFound {
                    label: callback.label().to_owned(),
                })?;
            self.callbacks.remove(index);
            debug!("Removed callback `{}`", callback.label());
        }
        Ok(self)
    }

    /// Invokes every callback with `args`, in stored order.
    ///
    /// Callbacks whose bound target has been dropped are skipped.
    ///
    /// # Errors
    ///
    /// The error of the first failing callback, unchanged. Later callbacks are not
    /// invoked.
    pub fn call(&self, args: &A) -> std::result::Result<(), BoxError> {
        for callback in &self.callbacks {
            if !callback.is_callable() {
                debug!("Skipping expired callback `{}`", callback.label());
                continue;
            }
            trace!("Invoking callback `{}`", callback.label());
            callback.call(args)?;
        }
        Ok(())
    }

    /// Returns `true` if `callback` is registered.
    #[inline]
    pub fn contains(&self, callback: &Callback<A>) -> bool {
        self.position(callback).is_some()
    }

    /// Returns an iterator over the callbacks in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Callback<A>> {
        self.callbacks.iter()
    }

    /// Number of registered callbacks.
    #[inline]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` if no callbacks are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    #[inline]
    fn position(&self, callback: &Callback<A>) -> Option<usize> {
        self.callbacks.iter().position(|c| c.ptr_eq(callback))
    }
}

impl<A> Default for Channel<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Channel<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.callbacks.iter().map(Callback::label))
            .finish()
    }
}

/// Fails on the first callback that can no longer be called.
fn ensure_callable<A>(handlers: &Handlers<A>) -> Result<()> {
    let invalid = |callback: &Callback<A>, position| Error::InvalidCallback {
        label: callback.label().to_owned(),
        position,
    };

    match handlers {
        Handlers::One(callback) if !callback.is_callable() => Err(invalid(callback, None)),
        Handlers::One(_) => Ok(()),
        Handlers::Many(callbacks) => match callbacks.iter().position(|c| !c.is_callable()) {
            Some(index) => Err(invalid(&callbacks[index], Some(index))),
            None => Ok(()),
        },
    }
}

/// Drops repeated callbacks, keeping each one's first occurrence.
fn dedup<A>(callbacks: &mut Vec<Callback<A>>) {
    let mut seen = HashSet::with_capacity(callbacks.len());
    callbacks.retain(|callback| seen.insert(callback.id()));
}
