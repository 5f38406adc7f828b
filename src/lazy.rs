//! Lazy, pull-driven application of a pipeline.
//!
//! [`to_iter`] wraps an input and a transducer into a [`LazyTransformer`],
//! an [`Iterator`] that pulls upstream elements only when asked for output.
//!
//! # Examples
//!
//! ```rust
//! use transducers::{to_iter, to_vec, xform::{map, take}};
//!
//! let doubled = to_iter(0.., map(|x: u64| x * 2));
//! let out: Vec<u64> = to_vec(doubled, take(5));
//! assert_eq!(out, vec![0, 2, 4, 6, 8]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;

use tracing::debug;

use crate::{
    compose::Transducer,
    error::Result,
    reduce::{reduce_iter, Reducible},
    step::Step,
    transformer::Transformer,
};

/// Terminal transformer of a lazy pipeline: queues every output element.
pub struct Buffer<U> {
    _element: std::marker::PhantomData<fn(U)>,
}

impl<U> Buffer<U> {
    fn new() -> Self {
        Buffer {
            _element: std::marker::PhantomData,
        }
    }
}

impl<U> Transformer<U> for Buffer<U> {
    type Acc = VecDeque<U>;

    fn init(&mut self) -> Result<VecDeque<U>> {
        Ok(VecDeque::new())
    }

    fn step(&mut self, mut acc: VecDeque<U>, input: U) -> Step<VecDeque<U>> {
        acc.push_back(input);
        Step::Continue(acc)
    }
}

/// Iterator over the output of a pipeline applied to a pull source.
///
/// Created by [`to_iter`]. Each call to `next` pulls just enough upstream
/// elements to produce one output or to observe the reduced signal. Once the
/// source runs out or a stage reports reduced, the pipeline is finished
/// (flushing any buffered partial state), the remaining output is drained,
/// and the iterator returns `None` from then on without touching the source.
///
/// `LazyTransformer` is itself [`Reducible`], so it can feed another pipeline.
pub struct LazyTransformer<S, X, U> {
    state: LazyState<S, X>,
    ready: VecDeque<U>,
}

enum LazyState<S, X> {
    Active { source: S, xf: X },
    Complete,
    Invalid,
}

impl<S, X> LazyState<S, X> {
    fn take(&mut self) -> Self {
        mem::replace(self, LazyState::Invalid)
    }
}

/// Apply `xform` lazily to `input`.
///
/// Nothing is pulled from `input` until the returned iterator is advanced.
/// `input` must be iterable; [`by_index`](crate::by_index) inputs are.
pub fn to_iter<I, X, U>(input: I, xform: X) -> LazyTransformer<I::IntoIter, X::Output, U>
where
    I: IntoIterator,
    X: Transducer<Buffer<U>>,
    X::Output: Transformer<I::Item, Acc = VecDeque<U>>,
{
    LazyTransformer {
        state: LazyState::Active {
            source: input.into_iter(),
            xf: xform.apply(Buffer::new()),
        },
        ready: VecDeque::new(),
    }
}

impl<S, X, U> LazyTransformer<S, X, U> {
    /// Check if the pipeline has finished; buffered output may remain.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, LazyState::Complete)
    }
}

impl<S, X, U> Iterator for LazyTransformer<S, X, U>
where
    S: Iterator,
    X: Transformer<S::Item, Acc = VecDeque<U>>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            if let Some(output) = self.ready.pop_front() {
                return Some(output);
            }

            match self.state.take() {
                LazyState::Active { mut source, mut xf } => {
                    if xf.is_done() {
                        self.ready = xf.result(mem::take(&mut self.ready));
                        debug!(pending = self.ready.len(), "lazy pipeline done before pull");
                        self.state = LazyState::Complete;
                        continue;
                    }
                    let Some(input) = source.next() else {
                        self.ready = xf.result(mem::take(&mut self.ready));
                        debug!(pending = self.ready.len(), "lazy source exhausted");
                        self.state = LazyState::Complete;
                        continue;
                    };
                    match xf.step(mem::take(&mut self.ready), input) {
                        Step::Continue(ready) => {
                            self.ready = ready;
                            self.state = LazyState::Active { source, xf };
                        }
                        Step::Reduced(ready) => {
                            self.ready = xf.result(ready);
                            debug!(pending = self.ready.len(), "lazy pipeline reduced");
                            self.state = LazyState::Complete;
                        }
                    }
                }
                LazyState::Complete => {
                    self.state = LazyState::Complete;
                    return None;
                }
                LazyState::Invalid => return None,
            }
        }
    }
}

impl<S, X, U> FusedIterator for LazyTransformer<S, X, U>
where
    S: Iterator,
    X: Transformer<S::Item, Acc = VecDeque<U>>,
{
}

impl<S, X, U> Reducible for LazyTransformer<S, X, U>
where
    S: Iterator,
    X: Transformer<S::Item, Acc = VecDeque<U>>,
{
    type Item = U;

    fn reduce_with<Y>(self, xf: &mut Y, acc: Y::Acc) -> Step<Y::Acc>
    where
        Y: Transformer<U>,
    {
        reduce_iter(self, xf, acc)
    }
}
