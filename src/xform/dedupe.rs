use std::marker::PhantomData;

use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Transducer that suppresses consecutive duplicates. Created by [`dedupe`].
pub struct Dedupe<T> {
    _element: PhantomData<fn(T)>,
}

impl<T> Clone for Dedupe<T> {
    fn clone(&self) -> Self {
        dedupe()
    }
}

/// Forward an element only when it differs from the previously forwarded one.
///
/// ```rust
/// use transducers::{into, xform::dedupe};
///
/// assert_eq!(into(Vec::new(), dedupe(), vec![1, 2, 2, 3, 3, 3, 5]), vec![1, 2, 3, 5]);
/// ```
pub fn dedupe<T>() -> Dedupe<T> {
    Dedupe {
        _element: PhantomData,
    }
}

impl<T, R> Transducer<R> for Dedupe<T> {
    type Output = DedupeTransformer<T, R>;

    fn apply(self, downstream: R) -> Self::Output {
        DedupeTransformer {
            last: None,
            inner: downstream,
        }
    }
}

pub struct DedupeTransformer<T, R> {
    // `None` until the first element; no real element compares equal to it
    last: Option<T>,
    inner: R,
}

impl<T, R> Transformer<T> for DedupeTransformer<T, R>
where
    T: PartialEq + Clone,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if self.last.as_ref() == Some(&input) {
            return Step::Continue(acc);
        }
        self.last = Some(input.clone());
        self.inner.step(acc, input)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}
