//! The "one callback or a sequence of callbacks" argument shape.
//!
//! [`Handlers`] is what [`Channel::add`](crate::Channel::add),
//! [`Channel::remove`](crate::Channel::remove) and registry construction accept. Most
//! callers never name it: a [`Callback`], a `Vec`, an array or a slice of callbacks
//! all convert into it.

use std::fmt;

use crate::callback::Callback;

/// A single callback or an ordered sequence of callbacks.
pub enum Handlers<A> {
    /// One callback.
    One(Callback<A>),
    /// An ordered sequence of callbacks.
    Many(Vec<Callback<A>>),
}

impl<A> Handlers<A> {
    /// Flattens into the carried callbacks, in order.
    pub fn into_vec(self) -> Vec<Callback<A>> {
        match self {
            Handlers::One(callback) => vec![callback],
            Handlers::Many(callbacks) => callbacks,
        }
    }
}

impl<A> fmt::Debug for Handlers<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handlers::One(callback) => f.debug_tuple("One").field(callback).finish(),
            Handlers::Many(callbacks) => f.debug_tuple("Many").field(callbacks).finish(),
        }
    }
}

impl<A> From<Callback<A>> for Handlers<A> {
    fn from(callback: Callback<A>) -> Self {
        Handlers::One(callback)
    }
}

impl<A> From<&Callback<A>> for Handlers<A> {
    fn from(callback: &Callback<A>) -> Self {
        Handlers::One(callback.clone())
    }
}

impl<A> From<Vec<Callback<A>>> for Handlers<A> {
    fn from(callbacks: Vec<Callback<A>>) -> Self {
        Handlers::Many(callbacks)
    }
}

impl<A> From<&[Callback<A>]> for Handlers<A> {
    fn from(callbacks: &[Callback<A>]) -> Self {
        Handlers::Many(callbacks.to_vec())
    }
}

impl<A, const N: usize> From<[Callback<A>; N]> for Handlers<A> {
    fn from(callbacks: [Callback<A>; N]) -> Self {
        Handlers::Many(Vec::from(callbacks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_shape() {
        let f: Callback<u8> = Callback::new(|_| {});
        let g: Callback<u8> = Callback::new(|_| {});

        assert!(matches!(Handlers::from(&f), Handlers::One(_)));
        assert!(matches!(
            Handlers::from([f.clone(), g.clone()]),
            Handlers::Many(ref v) if v.len() == 2
        ));
        assert!(matches!(
            Handlers::from(&[f.clone()][..]),
            Handlers::Many(ref v) if v.len() == 1
        ));

        let flat = Handlers::from(vec![g.clone(), f.clone()]).into_vec();
        assert_eq!(flat, vec![g, f]);
    }

    #[test]
    fn single_callback_flattens_to_one_element() {
        let f: Callback<u8> = Callback::new(|_| {});

        assert_eq!(Handlers::from(&f).into_vec(), vec![f.clone()]);
        assert!(Handlers::<u8>::from(Vec::new()).into_vec().is_empty());
    }
}
