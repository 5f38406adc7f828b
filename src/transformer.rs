//! The three-operation contract every transform and consumer implements.
//!
//! A [`Transformer<T>`] consumes elements of type `T` into an accumulator:
//!
//! - `init` produces a starting accumulator (optional; drivers usually supply one)
//! - `step` folds one element in, returning a [`Step`] that may carry the
//!   reduced signal
//! - `result` finalizes the accumulator once no more elements will arrive
//!
//! # Examples
//!
//! ```rust
//! use transducers::{transformer, Step, Transformer};
//!
//! let mut sum = transformer(|acc: i32, x: i32| acc + x);
//! let acc = sum.step(1, 2).into_inner();
//! assert_eq!(sum.result(acc), 3);
//! assert!(sum.init().is_err());
//! ```

use std::marker::PhantomData;

use either::Either;

use crate::{
    error::{Error, Result},
    step::Step,
};

/// Consumes elements of type `T` into an accumulator.
pub trait Transformer<T> {
    /// Accumulated value threaded through every call
    type Acc;

    /// Produce the initial accumulator.
    ///
    /// Transformers that cannot make one keep the default, which reports
    /// [`Error::MissingInit`].
    fn init(&mut self) -> Result<Self::Acc> {
        Err(Error::MissingInit)
    }

    /// Fold one element into the accumulator.
    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc>;

    /// Finish the accumulation. Called exactly once per run.
    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }

    /// Whether the transformer will accept no further elements.
    ///
    /// Drivers check this before pulling the next element, so a stage that
    /// is finished before seeing any input (such as `take(0)`) never causes
    /// a pull. Wrapping transformers forward their downstream's answer.
    fn is_done(&self) -> bool {
        false
    }

    fn boxed<'a>(self) -> Box<dyn Transformer<T, Acc = Self::Acc> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// A transformer built from a plain reducing function.
///
/// Created by [`transformer`]. It has no initial value of its own, so it
/// must be driven with an explicit starting accumulator.
pub struct Reducer<F, A> {
    f: F,
    _acc: PhantomData<fn(A) -> A>,
}

impl<F: Clone, A> Clone for Reducer<F, A> {
    fn clone(&self) -> Self {
        transformer(self.f.clone())
    }
}

/// Lift a two-argument reducing function into a [`Transformer`].
///
/// ```rust
/// use transducers::{transduce, transformer, xform::map};
///
/// let total = transduce(vec![1, 2, 3], map(|x: i32| x * 2), transformer(|a: i32, x: i32| a + x), 0);
/// assert_eq!(total, 12);
/// ```
pub fn transformer<F, A>(f: F) -> Reducer<F, A> {
    Reducer {
        f,
        _acc: PhantomData,
    }
}

impl<A, T, F> Transformer<T> for Reducer<F, A>
where
    F: FnMut(A, T) -> A,
{
    type Acc = A;

    fn step(&mut self, acc: A, input: T) -> Step<A> {
        Step::Continue((self.f)(acc, input))
    }
}

impl<T, X> Transformer<T> for &'_ mut X
where
    X: Transformer<T> + ?Sized,
{
    type Acc = X::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        (**self).step(acc, input)
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).result(acc)
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

impl<T, A> Transformer<T> for Box<dyn Transformer<T, Acc = A> + '_> {
    type Acc = A;

    fn init(&mut self) -> Result<A> {
        (**self).init()
    }

    fn step(&mut self, acc: A, input: T) -> Step<A> {
        (**self).step(acc, input)
    }

    fn result(&mut self, acc: A) -> A {
        (**self).result(acc)
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

impl<T, L, R> Transformer<T> for Either<L, R>
where
    L: Transformer<T>,
    R: Transformer<T, Acc = L::Acc>,
{
    type Acc = L::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        match self {
            Either::Left(l) => l.init(),
            Either::Right(r) => r.init(),
        }
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        match self {
            Either::Left(l) => l.step(acc, input),
            Either::Right(r) => r.step(acc, input),
        }
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        match self {
            Either::Left(l) => l.result(acc),
            Either::Right(r) => r.result(acc),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Either::Left(l) => l.is_done(),
            Either::Right(r) => r.is_done(),
        }
    }
}
