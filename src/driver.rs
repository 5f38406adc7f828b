//! Entry points that run a pipeline from an input to a target.
//!
//! Every driver builds the target's [`Transformer`], wraps it with the
//! pipeline, and hands the result to [`reduce`]. They differ only in where
//! the transformer and the starting accumulator come from.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    compose::Transducer,
    container::{Append, Container, Reshape},
    error::Result,
    reduce::{reduce, Reducible},
    transformer::Transformer,
};

/// Run `input` through `xform` into `transformer`, starting from `init`.
///
/// ```rust
/// use transducers::{compose, transduce, transformer, xform::{filter, map}};
///
/// let push = |mut acc: Vec<i32>, x: i32| {
///     acc.push(x);
///     acc
/// };
/// let xf = compose(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0));
/// assert_eq!(transduce(vec![1, 2, 3, 4], xf, transformer(push), Vec::new()), vec![2, 4]);
/// ```
pub fn transduce<I, X, R>(
    input: I,
    xform: X,
    transformer: R,
    init: <X::Output as Transformer<I::Item>>::Acc,
) -> <X::Output as Transformer<I::Item>>::Acc
where
    I: Reducible,
    X: Transducer<R>,
    X::Output: Transformer<I::Item>,
{
    reduce(input, xform.apply(transformer), init)
}

/// Like [`transduce`], but the starting accumulator comes from the
/// pipeline's `init`.
///
/// Fails with [`Error::MissingInit`](crate::Error::MissingInit) before any
/// element is consumed if the transformer cannot produce one.
pub fn transduce_init<I, X, R>(
    input: I,
    xform: X,
    transformer: R,
) -> Result<<X::Output as Transformer<I::Item>>::Acc>
where
    I: Reducible,
    X: Transducer<R>,
    X::Output: Transformer<I::Item>,
{
    let mut xf = xform.apply(transformer);
    let init = xf.init().map_err(|err| {
        debug!(%err, "transformer has no initial value");
        err
    })?;
    Ok(reduce(input, xf, init))
}

/// Accumulate `input`, transformed by `xform`, onto the end of `target`.
///
/// Existing contents of `target` are kept. For mappings, later entries with
/// an existing key overwrite it.
///
/// ```rust
/// use transducers::{into, xform::map};
///
/// assert_eq!(into(vec![1, 2, 3], map(|x: i32| x + 1), vec![7, 8, 9]), vec![1, 2, 3, 8, 9, 10]);
/// ```
pub fn into<C, X, I>(target: C, xform: X, input: I) -> C
where
    C: Container,
    I: Reducible,
    X: Transducer<C::Builder>,
    X::Output: Transformer<I::Item, Acc = C>,
{
    reduce(input, xform.apply(C::builder()), target)
}

/// Transform `input` into a fresh collection of the same shape.
///
/// Sequences produce sequences and mappings produce mappings; only the
/// element type may change.
pub fn seq<I, X, U>(input: I, xform: X) -> <I as Reshape<U>>::Output
where
    I: Reducible + Reshape<U>,
    X: Transducer<<<I as Reshape<U>>::Output as Container>::Builder>,
    X::Output: Transformer<I::Item, Acc = <I as Reshape<U>>::Output>,
{
    let builder = <<I as Reshape<U>>::Output as Container>::builder();
    let empty = <<I as Reshape<U>>::Output as Container>::empty();
    reduce(input, xform.apply(builder), empty)
}

/// Transform any reducible input into a `Vec`.
///
/// Pass [`Identity`](crate::Identity) to collect the input unchanged.
pub fn to_vec<I, X, U>(input: I, xform: X) -> Vec<U>
where
    I: Reducible,
    X: Transducer<Append<Vec<U>>>,
    X::Output: Transformer<I::Item, Acc = Vec<U>>,
{
    into(Vec::new(), xform, input)
}

/// Transform any reducible input into an insertion-ordered map.
///
/// The pipeline must produce `(key, value)` pairs.
///
/// ```rust
/// use transducers::{to_map, Identity};
///
/// let map = to_map(vec![("foo", 1), ("bar", 2)], Identity);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["foo", "bar"]);
/// ```
pub fn to_map<I, X, K, V>(input: I, xform: X) -> IndexMap<K, V>
where
    I: Reducible,
    K: Hash + Eq,
    X: Transducer<Append<IndexMap<K, V>>>,
    X::Output: Transformer<I::Item, Acc = IndexMap<K, V>>,
{
    into(IndexMap::new(), xform, input)
}
