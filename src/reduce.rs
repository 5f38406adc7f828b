//! Polymorphic reduction over every supported input shape.
//!
//! [`Reducible`] is the reduce capability: a type that knows how to feed its
//! elements, in order, into a [`Transformer`]. It is implemented for ordered
//! sequences, key/value mappings (as `(key, value)` pairs), pull iterators
//! wrapped by [`iterate`], and containers that only expose element access
//! through [`by_index`]. Third-party containers implement it directly.
//!
//! # Examples
//!
//! ```rust
//! use transducers::{reduce, transformer};
//!
//! let total = reduce(vec![1, 2, 3], transformer(|a: i32, x: i32| a + x), 10);
//! assert_eq!(total, 16);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

use either::Either;
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::{step::Step, transformer::Transformer};

/// Inputs that can drive a [`Transformer`] over their elements.
pub trait Reducible {
    /// Element handed to `step`
    type Item;

    /// Feed every element to `xf.step`, threading `acc`, until the elements run
    /// out or a step returns [`Step::Reduced`].
    ///
    /// The returned step is not opened: a `Reduced` result tells enclosing
    /// reductions to stop as well. `result` is not called here.
    fn reduce_with<X>(self, xf: &mut X, acc: X::Acc) -> Step<X::Acc>
    where
        X: Transformer<Self::Item>;
}

/// Drive `xf` over `input` starting from `init`, then finish with `result`.
///
/// `result` runs exactly once, whether the input ran out or a step reported
/// the reduced signal.
pub fn reduce<I, X>(input: I, mut xf: X, init: X::Acc) -> X::Acc
where
    I: Reducible,
    X: Transformer<I::Item>,
{
    let step = input.reduce_with(&mut xf, init);
    trace!(early = step.is_reduced(), "reduction finished");
    xf.result(step.into_inner())
}

/// Step through an iterator, stopping at the first reduced step.
///
/// Elements after the one that produced the signal are never pulled, and
/// nothing is pulled once `xf` reports it is done.
pub(crate) fn reduce_iter<I, X>(iter: I, xf: &mut X, mut acc: X::Acc) -> Step<X::Acc>
where
    I: IntoIterator,
    X: Transformer<I::Item> + ?Sized,
{
    let mut iter = iter.into_iter();
    loop {
        if xf.is_done() {
            return Step::Reduced(acc);
        }
        let Some(item) = iter.next() else {
            return Step::Continue(acc);
        };
        match xf.step(acc, item) {
            Step::Continue(next) => acc = next,
            reduced @ Step::Reduced(_) => return reduced,
        }
    }
}

macro_rules! reducible_via_iter {
    ($(impl<$($g:tt),*> for $ty:ty => $item:ty;)+) => {
        $(
            impl<$($g),*> Reducible for $ty {
                type Item = $item;

                fn reduce_with<X>(self, xf: &mut X, acc: X::Acc) -> Step<X::Acc>
                where
                    X: Transformer<Self::Item>,
                {
                    reduce_iter(self, xf, acc)
                }
            }
        )+
    };
}

reducible_via_iter! {
    impl<T> for Vec<T> => T;
    impl<T> for VecDeque<T> => T;
    impl<T> for Option<T> => T;
    impl<'a, T> for &'a [T] => &'a T;
    impl<'a, T> for &'a Vec<T> => &'a T;
    impl<T> for BTreeSet<T> => T;
    impl<T, S> for HashSet<T, S> => T;
    impl<T, S> for IndexSet<T, S> => T;
    impl<K, V> for BTreeMap<K, V> => (K, V);
    impl<'a, K, V> for &'a BTreeMap<K, V> => (&'a K, &'a V);
    impl<K, V, S> for HashMap<K, V, S> => (K, V);
    impl<K, V, S> for IndexMap<K, V, S> => (K, V);
    impl<'a, K, V, S> for &'a IndexMap<K, V, S> => (&'a K, &'a V);
}

impl<T, const N: usize> Reducible for [T; N] {
    type Item = T;

    fn reduce_with<X>(self, xf: &mut X, acc: X::Acc) -> Step<X::Acc>
    where
        X: Transformer<T>,
    {
        reduce_iter(self, xf, acc)
    }
}

impl<L, R> Reducible for Either<L, R>
where
    L: Reducible,
    R: Reducible<Item = L::Item>,
{
    type Item = L::Item;

    fn reduce_with<X>(self, xf: &mut X, acc: X::Acc) -> Step<X::Acc>
    where
        X: Transformer<Self::Item>,
    {
        match self {
            Either::Left(l) => l.reduce_with(xf, acc),
            Either::Right(r) => r.reduce_with(xf, acc),
        }
    }
}

/// A pull iterator presented as a reducible input.
///
/// Created by [`iterate`]. The source may be unbounded; the reduction then
/// ends only when a stage such as [`take`](crate::xform::take) reports the
/// reduced signal.
#[derive(Debug, Clone)]
pub struct Pull<I> {
    source: I,
}

/// Present anything iterable as a pull iterator.
///
/// ```rust
/// use std::cell::Cell;
/// use transducers::{iterate, to_vec, xform::take};
///
/// let pulls = Cell::new(0);
/// let source = (0..).inspect(|_| pulls.set(pulls.get() + 1));
/// let out: Vec<u32> = to_vec(iterate(source), take(3));
/// assert_eq!(out, vec![0, 1, 2]);
/// assert_eq!(pulls.get(), 3);
/// ```
pub fn iterate<I>(input: I) -> Pull<I::IntoIter>
where
    I: IntoIterator,
{
    Pull {
        source: input.into_iter(),
    }
}

impl<I> Pull<I> {
    pub fn into_inner(self) -> I {
        self.source
    }
}

impl<I: Iterator> Iterator for Pull<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: Iterator> Reducible for Pull<I> {
    type Item = I::Item;

    fn reduce_with<X>(mut self, xf: &mut X, acc: X::Acc) -> Step<X::Acc>
    where
        X: Transformer<I::Item>,
    {
        reduce_iter(&mut self.source, xf, acc)
    }
}

/// Element access capability for containers that cannot reduce themselves.
///
/// Wrap an implementor with [`by_index`] to reduce it as an ordered sequence.
pub trait ElementAccess {
    type Element;

    fn len(&self) -> usize;

    fn element(&self, index: usize) -> Self::Element;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [`ElementAccess`] container reduced by index from 0. Created by [`by_index`].
#[derive(Debug, Clone)]
pub struct ByIndex<C> {
    container: C,
}

/// Reduce a container through its element access, in index order.
pub fn by_index<C: ElementAccess>(container: C) -> ByIndex<C> {
    ByIndex { container }
}

impl<C: ElementAccess> Reducible for ByIndex<C> {
    type Item = C::Element;

    fn reduce_with<X>(self, xf: &mut X, acc: X::Acc) -> Step<X::Acc>
    where
        X: Transformer<C::Element>,
    {
        reduce_iter(self, xf, acc)
    }
}

/// Iterator over an [`ElementAccess`] container, so that [`by_index`] inputs
/// can also feed [`to_iter`](crate::to_iter).
#[derive(Debug, Clone)]
pub struct ByIndexIter<C> {
    container: C,
    index: usize,
}

impl<C: ElementAccess> Iterator for ByIndexIter<C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<C::Element> {
        if self.index >= self.container.len() {
            return None;
        }
        let element = self.container.element(self.index);
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.container.len().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl<C: ElementAccess> IntoIterator for ByIndex<C> {
    type Item = C::Element;
    type IntoIter = ByIndexIter<C>;

    fn into_iter(self) -> ByIndexIter<C> {
        ByIndexIter {
            container: self.container,
            index: 0,
        }
    }
}

impl<T, S: BuildHasher> ElementAccess for IndexSet<T, S>
where
    T: Clone,
{
    type Element = T;

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn element(&self, index: usize) -> T {
        self[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        compose::Transducer,
        transformer::transformer,
        xform::{map, take},
    };

    fn push<T>(mut acc: Vec<T>, x: T) -> Vec<T> {
        acc.push(x);
        acc
    }

    struct Squares(usize);

    impl ElementAccess for Squares {
        type Element = usize;

        fn len(&self) -> usize {
            self.0
        }

        fn element(&self, index: usize) -> usize {
            index * index
        }
    }

    #[test]
    fn test_reduce_sequence_in_order() {
        let out = reduce(vec!['a', 'b', 'c'], transformer(push), Vec::new());
        assert_eq!(out, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_reduce_mapping_as_pairs_in_insertion_order() {
        let mut scores = IndexMap::new();
        scores.insert("z", 1);
        scores.insert("a", 2);
        let out = reduce(scores, transformer(push), Vec::new());
        assert_eq!(out, vec![("z", 1), ("a", 2)]);
    }

    #[test]
    fn test_reduce_borrowed_slice() {
        let data = [1, 2, 3];
        let out = reduce(&data[..], transformer(|a: i32, x: &i32| a + x), 0);
        assert_eq!(out, 6);
    }

    #[test]
    fn test_reduce_stops_at_reduced_without_pulling_more() {
        let pulls = Cell::new(0);
        let source = iterate((1..).inspect(|_| pulls.set(pulls.get() + 1)));
        let xf = take(4).apply(transformer(push));
        let out = reduce(source, xf, Vec::new());
        assert_eq!(out, vec![1, 2, 3, 4]);
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn test_reduce_result_runs_once_after_early_stop() {
        let mut results = 0;
        {
            let counting = CountResults {
                results: &mut results,
            };
            let out = reduce(vec![1, 2, 3], take(1).apply(counting), 0);
            assert_eq!(out, 1);
        }
        assert_eq!(results, 1);
    }

    struct CountResults<'a> {
        results: &'a mut usize,
    }

    impl Transformer<i32> for CountResults<'_> {
        type Acc = i32;

        fn step(&mut self, acc: i32, input: i32) -> Step<i32> {
            Step::Continue(acc + input)
        }

        fn result(&mut self, acc: i32) -> i32 {
            *self.results += 1;
            acc
        }
    }

    #[test]
    fn test_by_index_walks_elements() {
        let out = reduce(by_index(Squares(4)), transformer(push), Vec::new());
        assert_eq!(out, vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_index_set_by_index() {
        let set: IndexSet<&str> = ["b", "a", "b"].into_iter().collect();
        let out = reduce(by_index(set), transformer(push), Vec::new());
        assert_eq!(out, vec!["b", "a"]);
    }

    #[test]
    fn test_by_index_as_iterator() {
        let mut it = by_index(Squares(3)).into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![0, 1, 4]);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_hash_inputs_yield_every_element() {
        let map: HashMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let mut out = reduce(map, transformer(push), Vec::new());
        out.sort();
        assert_eq!(out, vec![("x", 1), ("y", 2)]);

        let set: HashSet<u8> = [5, 3, 5].into_iter().collect();
        let total = reduce(set, transformer(|a: u32, x: u8| a + u32::from(x)), 0);
        assert_eq!(total, 8);
    }

    #[test]
    fn test_done_transformer_pulls_nothing() {
        let pulls = Cell::new(0);
        let source = iterate((0u32..).inspect(|_| pulls.set(pulls.get() + 1)));
        let out = reduce(source, take(0).apply(transformer(push)), Vec::new());
        assert!(out.is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_either_input() {
        let input: Either<Vec<u8>, Option<u8>> = Either::Right(Some(3));
        let out = reduce(input, map(|x: u8| x * 2).apply(transformer(push)), Vec::new());
        assert_eq!(out, vec![6]);
    }

    #[test]
    fn test_array_and_btree_inputs() {
        let out = reduce([3, 1], transformer(push), Vec::new());
        assert_eq!(out, vec![3, 1]);

        let tree: BTreeMap<u8, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
        let out = reduce(tree, transformer(push), Vec::new());
        assert_eq!(out, vec![(1, 'a'), (2, 'b')]);
    }
}
