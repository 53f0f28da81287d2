//! # eventuality
//!
//! Named events with ordered, duplicate-free callback channels.
//!
//! A [`Registry`] is built once from a set of event names, optionally with initial
//! callbacks. Each name owns a [`Channel`]; callbacks are attached and detached on the
//! channel and invoked together, synchronously and in order, when the channel is
//! called.
//!
//! ## Overview
//! ```text
//!   Registry::from_names / from_map / events!
//!        │
//!        ▼
//!   ┌──────────────────────────────────────┐
//!   │ Registry<A>                          │
//!   │   "on_open"  ──► Channel<A> [f, g]   │
//!   │   "on_close" ──► Channel<A> []       │
//!   └──────────────────────────────────────┘
//!        │ event_mut("on_open")?.add(h)?
//!        │ emit("on_open", &args)
//!        ▼
//!   f(&args) ─► g(&args) ─► h(&args)      (stops at the first error)
//! ```
//!
//! | Area          | Description                                         | Key types                          |
//! |---------------|-----------------------------------------------------|------------------------------------|
//! | **Callbacks** | Identity-compared callable handles                  | [`Callback`], [`Handlers`]         |
//! | **Channels**  | Ordered, duplicate-free storage and fan-out         | [`Channel`]                        |
//! | **Registry**  | Fixed set of named events                           | [`Registry`], [`EventSpec`]        |
//! | **Errors**    | Typed errors for every misuse                       | [`Error`]                          |
//!
//! ## Example
//! ```rust
//! use eventuality::{Callback, Registry};
//!
//! let print: Callback<String> = Callback::named("print", |line: &String| println!("{line}"));
//! let politely: Callback<String> = Callback::named("print_politely", |line: &String| {
//!     println!("{line}, and I just wanted to let you know")
//! });
//!
//! let mut handler: Registry<String> = Registry::from_names(["on_event"])?;
//! handler.event_mut("on_event")?.add([print.clone(), politely])?;
//! handler.emit("on_event", &"An event happened".to_string())?;
//!
//! handler.event_mut("on_event")?.remove(&print)?;
//! assert_eq!(handler["on_event"].len(), 1);
//! # Ok::<(), eventuality::Error>(())
//! ```
//!
//! ## Logging
//! The crate logs through the [`log`] facade: `debug` for registry construction and
//! channel changes, `trace` for each invocation. Errors are returned, never logged.

mod callback;
mod channel;
mod error;
mod handlers;
mod macros;
mod registry;

#[cfg(test)]
mod test_support;

// ---- Public re-exports ----

pub use callback::{BoxError, CallResult, Callback};
pub use channel::Channel;
pub use error::{Error, Result};
pub use handlers::Handlers;
pub use registry::{EventSpec, Registry};
