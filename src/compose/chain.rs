use crate::compose::Transducer;

/// Two transducers run one after the other.
///
/// Elements pass through `first`, then through `second`, then reach the
/// consumer. Created by [`compose`] or the [`compose!`](crate::compose!) macro.
#[derive(Debug, Clone, Copy)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

/// Compose two transducers so elements flow through `first` and then `second`.
///
/// ```rust
/// use transducers::{compose, into, xform::{filter, map}};
///
/// let out = into(Vec::new(), compose(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0)), vec![1, 2, 3, 4]);
/// assert_eq!(out, vec![2, 4]);
/// ```
pub fn compose<A, B>(first: A, second: B) -> Compose<A, B> {
    Compose { first, second }
}

impl<R, A, B> Transducer<R> for Compose<A, B>
where
    B: Transducer<R>,
    A: Transducer<B::Output>,
{
    type Output = A::Output;

    fn apply(self, downstream: R) -> Self::Output {
        // wrap from the consumer outwards so `first` sees elements first
        self.first.apply(self.second.apply(downstream))
    }
}

/// The empty pipeline. Forwards the downstream transformer unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<R> Transducer<R> for Identity {
    type Output = R;

    fn apply(self, downstream: R) -> R {
        downstream
    }
}

/// Compose any number of transducers, left to right in data-flow order.
///
/// `compose!()` is [`Identity`]; a single argument is returned as is.
///
/// ```rust
/// use transducers::{compose, into, xform::{cat, filter, map}};
///
/// let xf = compose!(map(|x: i32| vec![x, x * 2]), cat(), filter(|x: &i32| *x > 2));
/// assert_eq!(into(Vec::new(), xf, vec![1, 2, 3, 4]), vec![4, 3, 6, 4, 8]);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::Identity
    };
    ($xf:expr $(,)?) => {
        $xf
    };
    ($xf:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($xf, $crate::compose!($($rest),+))
    };
}
