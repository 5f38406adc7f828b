use tracing::trace;

use crate::{
    compose::{compose, Compose, Transducer},
    error::Result,
    reduce::Reducible,
    step::Step,
    transformer::Transformer,
    xform::map::{map, Map},
};

/// Transducer that flattens reducible elements. Created by [`cat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

/// Flatten each element, which must itself be [`Reducible`], into the stream.
///
/// Each element is reduced directly into the downstream transformer; no
/// intermediate collection is built. A reduced signal from inside a nested
/// element stops the outer reduction as well.
///
/// ```rust
/// use transducers::{into, xform::cat};
///
/// assert_eq!(into(Vec::new(), cat(), vec![vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
/// ```
pub fn cat() -> Cat {
    Cat
}

impl<R> Transducer<R> for Cat {
    type Output = CatTransformer<R>;

    fn apply(self, downstream: R) -> Self::Output {
        CatTransformer { inner: downstream }
    }
}

pub struct CatTransformer<R> {
    inner: R,
}

impl<T, R> Transformer<T> for CatTransformer<R>
where
    T: Reducible,
    R: Transformer<T::Item>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        let next = input.reduce_with(&mut self.inner, acc);
        if next.is_reduced() {
            trace!("nested reduction stopped, propagating");
        }
        next
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

/// [`map`] followed by [`cat`].
pub type Mapcat<F> = Compose<Map<F>, Cat>;

/// Map each element to a reducible collection, then flatten it.
///
/// ```rust
/// use transducers::{eager, into, xform::mapcat};
///
/// let out = into(Vec::new(), mapcat(|row: Vec<i32>| eager::map(row, |x: i32| x + 1)), vec![vec![1, 2], vec![3, 4]]);
/// assert_eq!(out, vec![2, 3, 4, 5]);
/// ```
pub fn mapcat<F>(f: F) -> Mapcat<F> {
    compose(map(f), cat())
}

#[cfg(test)]
mod tests {
    use either::Either;

    use super::*;
    use crate::xform::{
        filter, take,
        testing::{run, Collect},
    };

    #[test]
    fn test_cat_flattens() {
        let xf = cat().apply(Collect::default());
        let (out, _) = run(xf, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_cat_skips_empty_and_absent() {
        let xf = cat().apply(Collect::default());
        let (out, _) = run(xf, vec![Some(1), None, Some(3)]);
        assert_eq!(out, vec![1, 3]);
    }

    #[test]
    fn test_cat_stops_outer_on_nested_reduced() {
        let xf = compose(cat(), take(3)).apply(Collect::default());
        let (out, consumed) = run(xf, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_mapcat_then_filter() {
        let xf = compose(
            mapcat(|x: i32| vec![x, x * 2]),
            filter(|x: &i32| *x > 2),
        )
        .apply(Collect::default());
        let (out, _) = run(xf, vec![1, 2, 3, 4]);
        assert_eq!(out, vec![4, 3, 6, 4, 8]);
    }

    #[test]
    fn test_mapcat_with_mixed_shapes() {
        let xf = mapcat(|x: u32| {
            if x % 2 == 0 {
                Either::Left(vec![x; x as usize])
            } else {
                Either::Right(Some(x))
            }
        })
        .apply(Collect::default());
        let (out, _) = run(xf, vec![1, 2, 3]);
        assert_eq!(out, vec![1, 2, 2, 3]);
    }
}
