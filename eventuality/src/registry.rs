//! Named events and their channels.
//!
//! This module provides [`Registry`], which owns one [`Channel`] per event name. The
//! set of names is fixed when the registry is built; the callbacks inside each
//! channel can change at any time.
//!
//! # Construction
//!
//! A registry is built from an [`EventSpec`]:
//! - **Names**: every name gets a fresh, empty channel.
//! - **Map**: every name gets a channel seeded with its callbacks.
//!
//! Building is all-or-nothing: a malformed input yields
//! [`Error::InvalidSpecification`] and no registry.
//!
//! # Lookup
//!
//! Presence is decided by the name alone. A channel without callbacks is still a
//! registered event, and looking it up succeeds:
//!
//! ```rust
//! use eventuality::{Error, Registry};
//!
//! let registry: Registry<String> = Registry::from_names(["on_open"])?;
//!
//! assert!(registry.event("on_open")?.is_empty());
//! assert!(matches!(registry.event("on_close"), Err(Error::UndefinedEvent { .. })));
//! # Ok::<(), eventuality::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! `Registry` does no locking of its own. It is `Send + Sync` because callbacks are,
//! so it can be moved to another thread or wrapped in a caller-owned `Mutex`; every
//! mutation goes through `&mut`.

use std::{collections::HashMap, fmt, ops::Index};

use log::debug;

use crate::{
    channel::Channel,
    error::{Error, Result},
    handlers::Handlers,
};

/// The recognized shapes of registry construction input.
pub enum EventSpec<A> {
    /// Event names; each gets an empty channel. Repeated names collapse into one.
    Names(Vec<String>),
    /// Event names paired with their initial callbacks.
    Map(Vec<(String, Handlers<A>)>),
}

impl<A> From<Vec<String>> for EventSpec<A> {
    fn from(names: Vec<String>) -> Self {
        EventSpec::Names(names)
    }
}

impl<A> From<Vec<&str>> for EventSpec<A> {
    fn from(names: Vec<&str>) -> Self {
        EventSpec::Names(names.into_iter().map(String::from).collect())
    }
}

impl<A> From<&[&str]> for EventSpec<A> {
    fn from(names: &[&str]) -> Self {
        EventSpec::Names(names.iter().map(|name| String::from(*name)).collect())
    }
}

impl<A, const N: usize> From<[&str; N]> for EventSpec<A> {
    fn from(names: [&str; N]) -> Self {
        EventSpec::Names(names.into_iter().map(String::from).collect())
    }
}

impl<A> From<Vec<(String, Handlers<A>)>> for EventSpec<A> {
    fn from(entries: Vec<(String, Handlers<A>)>) -> Self {
        EventSpec::Map(entries)
    }
}

impl<A> From<HashMap<String, Handlers<A>>> for EventSpec<A> {
    fn from(entries: HashMap<String, Handlers<A>>) -> Self {
        EventSpec::Map(entries.into_iter().collect())
    }
}

impl<A, const N: usize> From<[(&str, Handlers<A>); N]> for EventSpec<A> {
    fn from(entries: [(&str, Handlers<A>); N]) -> Self {
        EventSpec::Map(
            entries
                .into_iter()
                .map(|(name, handlers)| (String::from(name), handlers))
                .collect(),
        )
    }
}

/// A fixed set of named events, each owning its own [`Channel`].
pub struct Registry<A> {
    /// Map from event name to its position in `events`.
    index: HashMap<String, usize>,

    /// Events in registration order.
    events: Vec<(String, Channel<A>)>,
}

impl<A> Registry<A> {
    /// Builds a registry from any recognized input shape.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpecification`] as described on [`from_names`](Self::from_names)
    /// and [`from_map`](Self::from_map).
    pub fn new(spec: impl Into<EventSpec<A>>) -> Result<Self> {
        match spec.into() {
            EventSpec::Names(names) => Self::from_names(names),
            EventSpec::Map(entries) => Self::from_map(entries),
        }
    }

    /// Builds a registry with one empty channel per distinct name.
    ///
    /// Any string is a valid name, the empty string included, so this currently
    /// always returns `Ok`.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::empty();
        for name in names {
            let name = name.into();
            if registry.contains(&name) {
                debug!("Event '{}' listed more than once, keeping one", name);
                continue;
            }
            registry.insert(name, Channel::new());
        }
        debug!("Registered {} events", registry.len());
        Ok(registry)
    }

    /// Builds a registry from names paired with their initial callbacks.
    ///
    /// Each value may be one callback or a sequence; sequences are deduplicated in
    /// first-seen order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpecification`] if a name appears twice or a value holds a
    /// callback that is not callable.
    pub fn from_map<I, S, H>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, H)>,
        S: Into<String>,
        H: Into<Handlers<A>>,
    {
        let mut registry = Self::empty();
        for (name, handlers) in entries {
            let name = name.into();
            if registry.contains(&name) {
                return Err(Error::invalid_spec(format!(
                    "event '{name}' is defined more than once"
                )));
            }

            let channel = Channel::with_callbacks(handlers).map_err(|err| match err {
                Error::InvalidCallback { label, .. } => Error::invalid_spec(format!(
                    "callback `{label}` for event '{name}' is not callable"
                )),
                other => other,
            })?;
            registry.insert(name, channel);
        }
        debug!("Registered {} events", registry.len());
        Ok(registry)
    }

    /// Returns the channel for `name`, if registered.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Channel<A>> {
        let index = *self.index.get(name)?;
        Some(&self.events[index].1)
    }

    /// Returns the channel for `name` mutably, if registered.
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Channel<A>> {
        let index = *self.index.get(name)?;
        Some(&mut self.events[index].1)
    }

    /// Returns the channel for `name`.
    ///
    /// # Errors
    ///
    /// [`Error::UndefinedEvent`] if `name` was never registered.
    pub fn event(&self, name: &str) -> Result<&Channel<A>> {
        self.get(name).ok_or_else(|| undefined(name))
    }

    /// Returns the channel for `name` mutably.
    ///
    /// # Errors
    ///
    /// [`Error::UndefinedEvent`] if `name` was never registered.
    pub fn event_mut(&mut self, name: &str) -> Result<&mut Channel<A>> {
        self.get_mut(name).ok_or_else(|| undefined(name))
    }

    /// Invokes every callback of `name` with `args`.
    ///
    /// # Errors
    ///
    /// [`Error::UndefinedEvent`] for an unknown name, or [`Error::Callback`] carrying
    /// the error of the first failing callback.
    pub fn emit(&self, name: &str, args: &A) -> Result<()> {
        self.event(name)?.call(args).map_err(Error::Callback)
    }

    /// Returns `true` if `name` is a registered event.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Event names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|(name, _)| name.as_str())
    }

    /// Events and their channels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Channel<A>)> {
        self.events
            .iter()
            .map(|(name, channel)| (name.as_str(), channel))
    }

    /// Number of registered events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn empty() -> Self {
        Self {
            index: HashMap::new(),
            events: Vec::new(),
        }
    }

    fn insert(&mut self, name: String, channel: Channel<A>) {
        self.index.insert(name.clone(), self.events.len());
        self.events.push((name, channel));
    }
}

/// Panics if `name` is not a registered event; use [`Registry::event`] to handle
/// that case.
impl<A> Index<&str> for Registry<A> {
    type Output = Channel<A>;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(channel) => channel,
            None => panic!("'{name}' is not defined as an event"),
        }
    }
}

impl<A> fmt::Debug for Registry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn undefined(name: &str) -> Error {
    Error::UndefinedEvent {
        name: name.to_owned(),
    }
}
