//! Fixtures shared by the unit tests.

use std::{
    fmt,
    marker::PhantomData,
    sync::{Arc, Mutex},
};

use crate::callback::Callback;

/// Installs `env_logger` once so `RUST_LOG=eventuality=trace` shows library logs.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hands out labelled callbacks that append `label(args)` to a shared log.
pub(crate) struct Recorder<A> {
    calls: Arc<Mutex<Vec<String>>>,
    _args: PhantomData<fn(&A)>,
}

impl<A: fmt::Debug + 'static> Recorder<A> {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            _args: PhantomData,
        }
    }

    /// A fresh callback; every call yields a distinct identity.
    pub(crate) fn callback(&self, label: &'static str) -> Callback<A> {
        let calls = Arc::clone(&self.calls);
        Callback::named(label, move |args: &A| {
            calls.lock().unwrap().push(format!("{label}({args:?})"));
        })
    }

    /// Everything recorded so far, in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// A bound callback whose target is already gone.
pub(crate) fn expired<A: 'static>(label: &'static str) -> Callback<A> {
    let target = Arc::new(());
    let callback = Callback::bound(&target, |_: &(), _: &A| {}).with_label(label);
    drop(target);
    callback
}
