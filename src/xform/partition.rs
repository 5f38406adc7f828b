use std::{marker::PhantomData, mem};

use tracing::debug;

use crate::{compose::Transducer, error::Result, step::Step, transformer::Transformer};

/// Transducer that groups elements into fixed-size chunks. Created by [`partition`].
pub struct Partition<T> {
    size: usize,
    _element: PhantomData<fn(T)>,
}

impl<T> Clone for Partition<T> {
    fn clone(&self) -> Self {
        partition(self.size)
    }
}

/// Group elements into `Vec`s of `size` elements.
///
/// A trailing, shorter chunk is forwarded when the input runs out, but not
/// when the reduction was stopped early by a downstream stage. A `size` of 0
/// is treated as 1.
///
/// ```rust
/// use transducers::{compose, into, xform::{partition, take}};
///
/// let input = vec![1, 2, 3, 4, 5];
/// assert_eq!(into(Vec::new(), partition(2), input.clone()), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert_eq!(into(Vec::new(), compose(partition(2), take(2)), input), vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn partition<T>(size: usize) -> Partition<T> {
    Partition {
        size: size.max(1),
        _element: PhantomData,
    }
}

impl<T, R> Transducer<R> for Partition<T> {
    type Output = PartitionTransformer<T, R>;

    fn apply(self, downstream: R) -> Self::Output {
        PartitionTransformer {
            size: self.size,
            pending: Vec::with_capacity(self.size),
            terminated: false,
            inner: downstream,
        }
    }
}

pub struct PartitionTransformer<T, R> {
    size: usize,
    pending: Vec<T>,
    // downstream reported reduced; the pending chunk must not be flushed
    terminated: bool,
    inner: R,
}

impl<T, R> Transformer<T> for PartitionTransformer<T, R>
where
    R: Transformer<Vec<T>>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> Result<Self::Acc> {
        self.inner.init()
    }

    fn step(&mut self, acc: Self::Acc, input: T) -> Step<Self::Acc> {
        self.pending.push(input);
        if self.pending.len() < self.size {
            return Step::Continue(acc);
        }

        let chunk = mem::replace(&mut self.pending, Vec::with_capacity(self.size));
        let next = self.inner.step(acc, chunk);
        if next.is_reduced() {
            self.terminated = true;
        }
        next
    }

    fn result(&mut self, acc: Self::Acc) -> Self::Acc {
        let acc = if self.pending.is_empty() {
            acc
        } else if self.terminated {
            debug!(
                discarded = self.pending.len(),
                "partition terminated early, partial chunk not flushed"
            );
            self.pending.clear();
            acc
        } else {
            let chunk = mem::take(&mut self.pending);
            self.inner.step(acc, chunk).into_inner()
        };
        self.inner.result(acc)
    }

    fn is_done(&self) -> bool {
        self.terminated || self.inner.is_done()
    }
}
