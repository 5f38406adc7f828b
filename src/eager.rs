//! One-shot operations on concrete collections.
//!
//! Each function runs a single transform over `input` with [`seq`] and
//! returns a collection of the same shape. Use the constructors in
//! [`xform`](crate::xform) to build pipelines instead.
//!
//! ```rust
//! use transducers::eager;
//!
//! assert_eq!(eager::take(vec![1, 2, 3, 4], 2), vec![1, 2]);
//! assert_eq!(eager::partition(vec![1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::{container::Reshape, driver::seq, reduce::Reducible, xform};

pub fn map<I, F, U>(input: I, f: F) -> <I as Reshape<U>>::Output
where
    I: Reducible + Reshape<U>,
    F: FnMut(I::Item) -> U,
{
    seq::<_, _, U>(input, xform::map(f))
}

/// Map with the element's position as a second argument.
pub fn map_indexed<I, F, U>(input: I, f: F) -> <I as Reshape<U>>::Output
where
    I: Reducible + Reshape<U>,
    F: FnMut(I::Item, usize) -> U,
{
    seq::<_, _, U>(input, xform::map_indexed(f))
}

pub fn filter<I, T, P>(input: I, pred: P) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
    P: FnMut(&T) -> bool,
{
    seq::<_, _, T>(input, xform::filter(pred))
}

pub fn filter_indexed<I, T, P>(input: I, pred: P) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
    P: FnMut(&T, usize) -> bool,
{
    seq::<_, _, T>(input, xform::filter_indexed(pred))
}

pub fn remove<I, T, P>(input: I, pred: P) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
    P: FnMut(&T) -> bool,
{
    seq::<_, _, T>(input, xform::remove(pred))
}

/// The first `n` elements of `input`.
pub fn take<I, T>(input: I, n: usize) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
{
    seq::<_, _, T>(input, xform::take(n))
}

pub fn take_while<I, T, P>(input: I, pred: P) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
    P: FnMut(&T) -> bool,
{
    seq::<_, _, T>(input, xform::take_while(pred))
}

/// Everything after the first `n` elements of `input`.
pub fn drop<I, T>(input: I, n: usize) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
{
    seq::<_, _, T>(input, xform::drop(n))
}

pub fn drop_while<I, T, P>(input: I, pred: P) -> <I as Reshape<T>>::Output
where
    I: Reducible<Item = T> + Reshape<T>,
    P: FnMut(&T) -> bool,
{
    seq::<_, _, T>(input, xform::drop_while(pred))
}

/// Chunks of `size` elements; the last chunk may be shorter.
pub fn partition<I, T>(input: I, size: usize) -> <I as Reshape<Vec<T>>>::Output
where
    I: Reducible<Item = T> + Reshape<Vec<T>>,
{
    seq::<_, _, Vec<T>>(input, xform::partition(size))
}
