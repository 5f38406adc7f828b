use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Transducer that forwards at most `n` elements. Created by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    n: usize,
}

/// Forward the first `n` elements, then stop the reduction.
///
/// The step that forwards the `n`th element already reports the reduced
/// signal, so no further element is pulled from the input. `take(0)` is done
/// before it sees anything, so drivers pull nothing at all.
///
/// ```rust
/// use transducers::{iterate, to_vec, xform::take};
///
/// let naturals = iterate(0..);
/// let out: Vec<u64> = to_vec(naturals, take(6));
/// assert_eq!(out, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn take(n: usize) -> Take {
    Take { n }
}

impl<R> Transducer<R> for Take {
    type Output = TakeTransformer<R>;

    fn apply(self, downstream: R) -> Self::Output {
        TakeTransformer {
            remaining: self.n,
            inner: downstream,
        }
    }
}

pub struct TakeTransformer<R> {
    remaining: usize,
    inner: R,
}

impl<T, R> Transformer<T> for TakeTransformer<R>
where
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if self.remaining == 0 {
            return Step::Reduced(acc);
        }
        self.remaining -= 1;
        let next = self.inner.step(acc, input);
        if self.remaining == 0 {
            next.ensure_reduced()
        } else {
            next
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.remaining == 0 || self.inner.is_done()
    }
}

/// Transducer that forwards elements while a predicate holds. Created by [`take_while`].
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<P> {
    pred: P,
}

/// Forward elements while `pred` holds; stop at the first element where it fails.
///
/// The failing element is not forwarded.
pub fn take_while<P>(pred: P) -> TakeWhile<P> {
    TakeWhile { pred }
}

impl<R, P> Transducer<R> for TakeWhile<P> {
    type Output = TakeWhileTransformer<P, R>;

    fn apply(self, downstream: R) -> Self::Output {
        TakeWhileTransformer {
            pred: self.pred,
            inner: downstream,
        }
    }
}

pub struct TakeWhileTransformer<P, R> {
    pred: P,
    inner: R,
}

impl<T, P, R> Transformer<T> for TakeWhileTransformer<P, R>
where
    P: FnMut(&T) -> bool,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if (self.pred)(&input) {
            self.inner.step(acc, input)
        } else {
            Step::Reduced(acc)
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}
