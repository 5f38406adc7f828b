use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Elements that may be absent.
///
/// [`keep`] forwards the present value and skips absent ones. Only absence
/// counts: `Some(false)` or `Some(0)` are present.
pub trait Nullable {
    /// The value forwarded when present
    type Present;

    fn into_present(self) -> Option<Self::Present>;
}

impl<T> Nullable for Option<T> {
    type Present = T;

    fn into_present(self) -> Option<T> {
        self
    }
}

#[cfg(feature = "json")]
impl Nullable for serde_json::Value {
    type Present = serde_json::Value;

    fn into_present(self) -> Option<serde_json::Value> {
        match self {
            serde_json::Value::Null => None,
            value => Some(value),
        }
    }
}

/// Transducer that drops absent elements. Created by [`keep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Keep;

/// Forward every element that is not absent.
///
/// ```rust
/// use transducers::{to_vec, xform::keep};
///
/// let out: Vec<i32> = to_vec(vec![Some(1), None, Some(0), None], keep());
/// assert_eq!(out, vec![1, 0]);
/// ```
pub fn keep() -> Keep {
    Keep
}

impl<R> Transducer<R> for Keep {
    type Output = KeepTransformer<R>;

    fn apply(self, downstream: R) -> Self::Output {
        KeepTransformer { inner: downstream }
    }
}

pub struct KeepTransformer<R> {
    inner: R,
}

impl<T, R> Transformer<T> for KeepTransformer<R>
where
    T: Nullable,
    R: Transformer<T::Present>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        match input.into_present() {
            Some(value) => self.inner.step(acc, value),
            None => Step::Continue(acc),
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}
