use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Transducer that discards the first `n` elements. Created by [`drop`].
#[derive(Debug, Clone, Copy)]
pub struct DropFirst {
    n: usize,
}

/// Discard the first `n` elements and forward everything after them.
pub fn drop(n: usize) -> DropFirst {
    DropFirst { n }
}

impl<R> Transducer<R> for DropFirst {
    type Output = DropFirstTransformer<R>;

    fn apply(self, downstream: R) -> Self::Output {
        DropFirstTransformer {
            remaining: self.n,
            inner: downstream,
        }
    }
}

pub struct DropFirstTransformer<R> {
    remaining: usize,
    inner: R,
}

impl<T, R> Transformer<T> for DropFirstTransformer<R>
where
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Step::Continue(acc)
        } else {
            self.inner.step(acc, input)
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

/// Transducer that discards a leading run of matching elements. Created by [`drop_while`].
#[derive(Debug, Clone, Copy)]
pub struct DropWhile<P> {
    pred: P,
}

/// Discard elements while `pred` holds, then forward the rest.
///
/// Once `pred` fails, it is never evaluated again.
///
/// ```rust
/// use transducers::{to_vec, xform::drop_while};
///
/// let out: Vec<i32> = to_vec(vec![1, 2, 3, 2], drop_while(|x: &i32| *x < 3));
/// assert_eq!(out, vec![3, 2]);
/// ```
pub fn drop_while<P>(pred: P) -> DropWhile<P> {
    DropWhile { pred }
}

impl<R, P> Transducer<R> for DropWhile<P> {
    type Output = DropWhileTransformer<P, R>;

    fn apply(self, downstream: R) -> Self::Output {
        DropWhileTransformer {
            pred: self.pred,
            dropping: true,
            inner: downstream,
        }
    }
}

pub struct DropWhileTransformer<P, R> {
    pred: P,
    dropping: bool,
    inner: R,
}

impl<T, P, R> Transformer<T> for DropWhileTransformer<P, R>
where
    P: FnMut(&T) -> bool,
    R: Transformer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        if self.dropping {
            if (self.pred)(&input) {
                return Step::Continue(acc);
            }
            self.dropping = false;
        }
        self.inner.step(acc, input)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xform::testing::{run, Collect};

    #[test]
    fn test_drop_skips_prefix() {
        let xf = drop(2).apply(Collect::default());
        let (out, _) = run(xf, vec![1, 2, 3, 4]);
        assert_eq!(out, vec![3, 4]);
    }

    #[test]
    fn test_drop_everything() {
        let xf = drop(10).apply(Collect::default());
        let (out, consumed) = run(xf, vec![1, 2, 3, 4]);
        assert!(out.is_empty());
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_drop_while_forwards_after_first_failure() {
        let xf = drop_while(|x: &i32| *x < 3).apply(Collect::default());
        let (out, _) = run(xf, vec![1, 2, 3, 2]);
        assert_eq!(out, vec![3, 2]);
    }

    #[test]
    fn test_drop_while_never_rechecks() {
        let mut calls = 0;
        let xf = drop_while(|x: &i32| {
            calls += 1;
            *x < 5
        })
        .apply(Collect::default());
        let (out, _) = run(xf, vec![4, 5, 6, 1, 2]);
        assert_eq!(out, vec![5, 6, 1, 2]);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_drop_while_all_match() {
        let xf = drop_while(|x: &i32| *x < 10).apply(Collect::default());
        let (out, _) = run(xf, vec![1, 2, 3, 4]);
        assert!(out.is_empty());
    }
}
