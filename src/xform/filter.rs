use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Transducer that forwards elements by predicate.
///
/// Created by [`filter`] (forward when the predicate holds) or [`remove`]
/// (forward when it does not).
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    pred: P,
    keep_matches: bool,
}

/// Forward only the elements for which `pred` holds.
///
/// ```rust
/// use transducers::{to_vec, xform::filter};
///
/// let evens: Vec<i32> = to_vec(vec![1, 2, 3, 4], filter(|x: &i32| x % 2 == 0));
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<P>(pred: P) -> Filter<P> {
    Filter {
        pred,
        keep_matches: true,
    }
}

/// Forward only the elements for which `pred` does not hold.
pub fn remove<P>(pred: P) -> Filter<P> {
    Filter {
        pred,
        keep_matches: false,
    }
}

impl<R, P> Transducer<R> for Filter<P> {
    type Output = FilterTransformer<P, R>;

    fn apply(self, downstream: R) -> Self::Output {
        FilterTransformer {
            pred: self.pred,
            keep_matches: self.keep_matches,
            inner: downstream,
        }
    }
}

pub struct FilterTransformer<P, R> {
    pred: P,
    keep_matches: bool,
    inner: R,
}

impl<T, P, R> Transformer<T> for FilterTransformer<P, R>
where
    P: FnMut(&T) -> bool,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if (self.pred)(&input) == self.keep_matches {
            self.inner.step(acc, input)
        } else {
            Step::Continue(acc)
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

/// Transducer that forwards elements by a predicate over element and position.
///
/// Created by [`filter_indexed`] or [`remove_indexed`].
#[derive(Debug, Clone, Copy)]
pub struct FilterIndexed<P> {
    pred: P,
    keep_matches: bool,
}

/// Forward the elements for which `pred(element, index)` holds.
///
/// The index counts every element reaching this stage, kept or not.
pub fn filter_indexed<P>(pred: P) -> FilterIndexed<P> {
    FilterIndexed {
        pred,
        keep_matches: true,
    }
}

/// Forward the elements for which `pred(element, index)` does not hold.
pub fn remove_indexed<P>(pred: P) -> FilterIndexed<P> {
    FilterIndexed {
        pred,
        keep_matches: false,
    }
}

impl<R, P> Transducer<R> for FilterIndexed<P> {
    type Output = FilterIndexedTransformer<P, R>;

    fn apply(self, downstream: R) -> Self::Output {
        FilterIndexedTransformer {
            pred: self.pred,
            keep_matches: self.keep_matches,
            index: 0,
            inner: downstream,
        }
    }
}

pub struct FilterIndexedTransformer<P, R> {
    pred: P,
    keep_matches: bool,
    index: usize,
    inner: R,
}

impl<T, P, R> Transformer<T> for FilterIndexedTransformer<P, R>
where
    P: FnMut(&T, usize) -> bool,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        let index = self.index;
        self.index += 1;
        if (self.pred)(&input, index) == self.keep_matches {
            self.inner.step(acc, input)
        } else {
            Step::Continue(acc)
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}
