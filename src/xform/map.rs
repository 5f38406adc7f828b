use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Transducer that applies a function to every element.
///
/// Created by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    f: F,
}

/// Transform every element with `f`.
///
/// Mapping inputs supply `(key, value)` pairs; return a pair to keep
/// accumulating into a mapping.
///
/// ```rust
/// use transducers::{seq, xform::map};
/// use indexmap::IndexMap;
///
/// let prices: IndexMap<&str, u32> = [("tea", 3), ("cake", 5)].into_iter().collect();
/// let raised: IndexMap<&str, u32> = seq(prices, map(|(k, v): (&'static str, u32)| (k, v + 1)));
/// assert_eq!(raised["cake"], 6);
/// ```
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<R, F> Transducer<R> for Map<F> {
    type Output = MapTransformer<F, R>;

    fn apply(self, downstream: R) -> Self::Output {
        MapTransformer {
            f: self.f,
            inner: downstream,
        }
    }
}

pub struct MapTransformer<F, R> {
    f: F,
    inner: R,
}

impl<T, U, F, R> Transformer<T> for MapTransformer<F, R>
where
    F: FnMut(T) -> U,
    R: Transformer<U>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        let mapped = (self.f)(input);
        self.inner.step(acc, mapped)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

/// Transducer that applies a function to every element and its position.
///
/// Created by [`map_indexed`].
#[derive(Debug, Clone, Copy)]
pub struct MapIndexed<F> {
    f: F,
}

/// Transform every element with `f(element, index)`.
///
/// The index counts elements reaching this stage, starting at 0.
pub fn map_indexed<F>(f: F) -> MapIndexed<F> {
    MapIndexed { f }
}

impl<R, F> Transducer<R> for MapIndexed<F> {
    type Output = MapIndexedTransformer<F, R>;

    fn apply(self, downstream: R) -> Self::Output {
        MapIndexedTransformer {
            f: self.f,
            index: 0,
            inner: downstream,
        }
    }
}

pub struct MapIndexedTransformer<F, R> {
    f: F,
    index: usize,
    inner: R,
}

impl<T, U, F, R> Transformer<T> for MapIndexedTransformer<F, R>
where
    F: FnMut(T, usize) -> U,
    R: Transformer<U>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        let mapped = (self.f)(input, self.index);
        self.index += 1;
        self.inner.step(acc, mapped)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}
