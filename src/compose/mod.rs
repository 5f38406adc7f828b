//! Combining transducers into pipelines
//!
//! A [`Transducer`] turns a downstream [`Transformer`](crate::Transformer) into an
//! upstream-facing one. Pipelines are built by nesting them with [`compose`] or
//! the [`compose!`](crate::compose!) macro.

mod chain;

pub use chain::{compose, Compose, Identity};

/// A reusable, shape-independent element transformation.
///
/// `apply` consumes the transducer and wraps `downstream`. Any per-run state
/// (counters, buffers, remembered values) lives in the returned transformer,
/// so every application starts fresh. Clone the transducer to apply it again.
pub trait Transducer<R> {
    /// Transformer facing the pipeline's input
    type Output;

    fn apply(self, downstream: R) -> Self::Output;
}

/// A transducer defined by a closure from downstream to upstream transformer.
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Create a transducer from a closure.
///
/// ```rust
/// use transducers::{from_fn, to_vec, xform::map, Transducer};
///
/// let double_then_inc = from_fn(|r| map(|x: i32| x * 2).apply(map(|x: i32| x + 1).apply(r)));
/// let out: Vec<i32> = to_vec(vec![1, 2], double_then_inc);
/// assert_eq!(out, vec![3, 5]);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<R, O, F> Transducer<R> for FromFn<F>
where
    F: FnOnce(R) -> O,
{
    type Output = O;

    fn apply(self, downstream: R) -> O {
        (self.0)(downstream)
    }
}
