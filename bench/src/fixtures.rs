//! Payloads and callback batches shared across benchmarks.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use eventuality::Callback;

/// Per-frame payload, sized like a typical small event argument (16 bytes).
#[derive(Clone, Copy, Debug, Default)]
pub struct Tick {
    pub frame: u64,
    pub delta: f64,
}

/// `count` distinct callbacks that each add the tick's frame number to `sink`.
pub fn counting_callbacks(count: usize, sink: &Arc<AtomicU64>) -> Vec<Callback<Tick>> {
    (0..count)
        .map(|_| {
            let sink = Arc::clone(sink);
            Callback::named("count", move |tick: &Tick| {
                sink.fetch_add(tick.frame, Ordering::Relaxed);
            })
        })
        .collect()
}

/// Event names `on_0` .. `on_{count - 1}`.
pub fn event_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("on_{i}")).collect()
}
