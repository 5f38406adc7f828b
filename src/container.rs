//! Accumulation targets.
//!
//! [`Container`] is the transformer capability: a type that can produce an
//! empty instance of itself and a [`Transformer`] that appends elements to
//! it. Standard collections get it through [`Append`], which relies on
//! `Default` and `Extend`. A third-party container implements the trait with
//! its own builder, for example to collect into a mutable form and freeze it
//! in `result`.
//!
//! [`Reshape`] maps a container type to the same shape holding a different
//! element type, which lets [`seq`](crate::seq) return "the same kind of
//! collection" after a `map`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use indexmap::{IndexMap, IndexSet};

use crate::{error::Result, step::Step, transformer::Transformer};

/// Types that can be built up by a [`Transformer`].
pub trait Container: Sized {
    /// Element appended by the builder
    type Item;
    /// Transformer whose accumulator is the container itself
    type Builder: Transformer<Self::Item, Acc = Self>;

    fn empty() -> Self;

    fn builder() -> Self::Builder;
}

/// Appends to any `Default + Extend` collection.
///
/// `step` extends by one element; `result` is the identity.
pub struct Append<C> {
    _container: PhantomData<fn() -> C>,
}

impl<C> Append<C> {
    pub fn new() -> Self {
        Append {
            _container: PhantomData,
        }
    }
}

impl<C> Default for Append<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Append<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T, C> Transformer<T> for Append<C>
where
    C: Default + Extend<T>,
{
    type Acc = C;

    fn init(&mut self) -> Result<C> {
        Ok(C::default())
    }

    fn step(&mut self, mut acc: C, input: T) -> Step<C> {
        acc.extend(Some(input));
        Step::Continue(acc)
    }
}

macro_rules! container_via_append {
    ($(impl<$($g:ident),*> for $ty:ty => $item:ty;)+) => {
        $(
            impl<$($g),*> Container for $ty {
                type Item = $item;
                type Builder = Append<Self>;

                fn empty() -> Self {
                    Self::default()
                }

                fn builder() -> Self::Builder {
                    Append::new()
                }
            }
        )+
    };
}

container_via_append! {
    impl<T> for Vec<T> => T;
    impl<T> for VecDeque<T> => T;
    impl<> for String => char;
}

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;
    type Builder = Append<Self>;

    fn empty() -> Self {
        BTreeSet::new()
    }

    fn builder() -> Self::Builder {
        Append::new()
    }
}

impl<K: Ord, V> Container for BTreeMap<K, V> {
    type Item = (K, V);
    type Builder = Append<Self>;

    fn empty() -> Self {
        BTreeMap::new()
    }

    fn builder() -> Self::Builder {
        Append::new()
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = T;
    type Builder = Append<Self>;

    fn empty() -> Self {
        HashSet::default()
    }

    fn builder() -> Self::Builder {
        Append::new()
    }
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = (K, V);
    type Builder = Append<Self>;

    fn empty() -> Self {
        HashMap::default()
    }

    fn builder() -> Self::Builder {
        Append::new()
    }
}

impl<T, S> Container for IndexSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = T;
    type Builder = Append<Self>;

    fn empty() -> Self {
        IndexSet::default()
    }

    fn builder() -> Self::Builder {
        Append::new()
    }
}

impl<K, V, S> Container for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = (K, V);
    type Builder = Append<Self>;

    fn empty() -> Self {
        IndexMap::default()
    }

    fn builder() -> Self::Builder {
        Append::new()
    }
}

/// The same shape of container holding `U` elements.
pub trait Reshape<U> {
    type Output: Container<Item = U>;
}

impl<T, U> Reshape<U> for Vec<T> {
    type Output = Vec<U>;
}

impl<T, U> Reshape<U> for VecDeque<T> {
    type Output = VecDeque<U>;
}

impl<T, U: Ord> Reshape<U> for BTreeSet<T> {
    type Output = BTreeSet<U>;
}

impl<T, U: Eq + Hash> Reshape<U> for IndexSet<T> {
    type Output = IndexSet<U>;
}

impl<T, U, const N: usize> Reshape<U> for [T; N] {
    type Output = Vec<U>;
}

impl<K, V, K2: Ord, V2> Reshape<(K2, V2)> for BTreeMap<K, V> {
    type Output = BTreeMap<K2, V2>;
}

impl<K, V, K2: Eq + Hash, V2> Reshape<(K2, V2)> for IndexMap<K, V> {
    type Output = IndexMap<K2, V2>;
}

impl<T, S, U: Eq + Hash> Reshape<U> for HashSet<T, S> {
    type Output = HashSet<U>;
}

impl<K, V, S, K2: Eq + Hash, V2> Reshape<(K2, V2)> for HashMap<K, V, S> {
    type Output = HashMap<K2, V2>;
}
