//! Identity-compared callback handles.
//!
//! A [`Callback`] wraps a callable behind an `Arc`, so cloning a handle is cheap and
//! every clone refers to the *same* callback. Channels deduplicate and remove by this
//! identity, never by comparing closures.
//!
//! # Owned and bound callbacks
//!
//! - [`Callback::new`] / [`Callback::fallible`] own their closure and are always
//!   callable.
//! - [`Callback::bound`] targets an object held in an `Arc<T>` but keeps only a
//!   `Weak<T>`. Registering it does not keep the observer alive; once the last strong
//!   reference is dropped the callback reports [`is_callable()`](Callback::is_callable)
//!   as `false`.
//!
//! # Example
//!
//! ```rust
//! use eventuality::Callback;
//!
//! let print: Callback<String> = Callback::named("print", |line: &String| println!("{line}"));
//! let same = print.clone();
//!
//! assert_eq!(print, same);
//! assert_ne!(print, Callback::named("print", |line: &String| println!("{line}")));
//! ```

use std::{
    any::type_name,
    fmt,
    sync::{Arc, Weak},
};

/// Boxed error a fallible callback may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of invoking a single callback.
pub type CallResult = Result<(), BoxError>;

/// Type-erased invocation interface shared by all callback flavours.
trait Invoke<A>: Send + Sync {
    fn invoke(&self, args: &A) -> CallResult;

    /// `false` once the callable can no longer run.
    fn is_live(&self) -> bool;
}

/// Closure without a failure path.
struct Infallible<F>(F);

impl<A, F> Invoke<A> for Infallible<F>
where
    F: Fn(&A) + Send + Sync,
{
    fn invoke(&self, args: &A) -> CallResult {
        (self.0)(args);
        Ok(())
    }

    fn is_live(&self) -> bool {
        true
    }
}

/// Closure that may fail.
struct Fallible<F>(F);

impl<A, F> Invoke<A> for Fallible<F>
where
    F: Fn(&A) -> CallResult + Send + Sync,
{
    fn invoke(&self, args: &A) -> CallResult {
        (self.0)(args)
    }

    fn is_live(&self) -> bool {
        true
    }
}

/// Closure bound to a weakly held target.
struct Bound<T, F> {
    target: Weak<T>,
    f: F,
}

impl<A, T, F> Invoke<A> for Bound<T, F>
where
    T: Send + Sync,
    F: Fn(&T, &A) + Send + Sync,
{
    fn invoke(&self, args: &A) -> CallResult {
        if let Some(target) = self.target.upgrade() {
            (self.f)(&*target, args);
        }
        Ok(())
    }

    fn is_live(&self) -> bool {
        self.target.strong_count() > 0
    }
}

/// A cloneable handle to a callable taking `&A`.
///
/// Equality is identity: two handles are equal only if one was cloned from the
/// other. The label is metadata for errors and logs and takes no part in equality.
pub struct Callback<A> {
    inner: Arc<dyn Invoke<A>>,
    label: Arc<str>,
}

impl<A> Callback<A> {
    /// Wraps an infallible closure. The label defaults to the closure's type name.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Infallible(f)),
            label: type_name::<F>().into(),
        }
    }

    /// Wraps an infallible closure under an explicit label.
    pub fn named<F>(label: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self::new(f).with_label(label)
    }

    /// Wraps a closure whose error is propagated to whoever invokes the channel.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&A) -> CallResult + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Fallible(f)),
            label: type_name::<F>().into(),
        }
    }

    /// Binds `f` to `target` without keeping the target alive.
    ///
    /// The returned callback stops being callable once every strong reference to
    /// `target` is gone. Invoking it after that point does nothing.
    pub fn bound<T, F>(target: &Arc<T>, f: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&T, &A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Bound {
                target: Arc::downgrade(target),
                f,
            }),
            label: type_name::<T>().into(),
        }
    }

    /// Replaces the label, keeping the identity.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Label used in errors and logs.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` while the callable can still run.
    #[inline]
    pub fn is_callable(&self) -> bool {
        self.inner.is_live()
    }

    /// Invokes the callable with `args`.
    #[inline]
    pub fn call(&self, args: &A) -> CallResult {
        self.inner.invoke(args)
    }

    /// Returns `true` if both handles refer to the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }

    /// Address of the shared callable; stable for as long as any clone is alive.
    #[inline]
    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            label: Arc::clone(&self.label),
        }
    }
}

impl<A> PartialEq for Callback<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> Eq for Callback<A> {}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("label", &self.label)
            .field("callable", &self.is_callable())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn clones_share_identity() {
        // Given
        let cb: Callback<u32> = Callback::new(|_| {});

        // When
        let clone = cb.clone();
        let relabeled = cb.clone().with_label("renamed");

        // Then
        assert_eq!(cb, clone);
        assert_eq!(cb, relabeled);
        assert_eq!(relabeled.label(), "renamed");
    }

    #[test]
    fn identical_closures_are_distinct_callbacks() {
        let a: Callback<u32> = Callback::new(|_| {});
        let b: Callback<u32> = Callback::new(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn default_label_is_closure_type() {
        let cb: Callback<u32> = Callback::new(|_| {});
        assert!(cb.label().contains("closure"));
    }

    #[test]
    fn fallible_callback_returns_its_error() {
        let cb: Callback<u32> = Callback::fallible(|n| {
            if *n > 3 {
                return Err(format!("{n} is too large").into());
            }
            Ok(())
        });

        assert!(cb.call(&1).is_ok());
        let err = cb.call(&7).unwrap_err();
        assert_eq!(err.to_string(), "7 is too large");
    }

    #[test]
    fn bound_callback_follows_target_lifetime() {
        // Given
        let seen = Arc::new(Mutex::new(Vec::<u32>::new()));
        let cb: Callback<u32> = Callback::bound(&seen, |seen, n| seen.lock().unwrap().push(*n));

        // When
        cb.call(&1).unwrap();

        // Then
        assert!(cb.is_callable());
        assert_eq!(*seen.lock().unwrap(), vec![1]);

        // When
        drop(seen);

        // Then
        assert!(!cb.is_callable());
        assert!(cb.call(&2).is_ok());
    }

    #[test]
    fn debug_shows_label_and_state() {
        let cb: Callback<u32> = Callback::named("audit", |_| {});
        let text = format!("{cb:?}");
        assert!(text.contains("audit"));
        assert!(text.contains("callable: true"));
    }
}
