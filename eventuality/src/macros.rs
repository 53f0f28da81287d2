/// Build a [`Registry`](crate::Registry) from event names, or from names mapped to
/// callbacks.
///
/// Expands to [`Registry::from_names`](crate::Registry::from_names) or
/// [`Registry::from_map`](crate::Registry::from_map) and therefore yields a
/// [`Result`](crate::Result).
///
/// ```rust
/// use eventuality::{Callback, Registry, events};
///
/// let print: Callback<String> = Callback::named("print", |line: &String| println!("{line}"));
///
/// let dynamic: Registry<String> = events! { on_open, on_close }?;
/// let known = events! {
///     on_event => [print.clone()],
///     on_close => &print,
/// }?;
///
/// assert_eq!(dynamic.len(), 2);
/// assert_eq!(known["on_event"].len(), 1);
/// # Ok::<(), eventuality::Error>(())
/// ```
#[macro_export]
macro_rules! events {
    () => {
        $crate::Registry::from_names(::std::iter::empty::<&str>())
    };
    ($($name:ident),+ $(,)?) => {
        $crate::Registry::from_names([$(stringify!($name)),+])
    };
    ($($name:ident => $handlers:expr),+ $(,)?) => {
        $crate::Registry::from_map([$((stringify!($name), $crate::Handlers::from($handlers))),+])
    };
}
