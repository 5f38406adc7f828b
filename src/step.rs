/// Result of feeding one element to a [`Transformer`](crate::Transformer).
///
/// `Step` carries the accumulator either onward (`Continue`) or wrapped in the
/// reduced signal (`Reduced`), which tells every enclosing reduction to stop
/// pulling input and finish with the wrapped value.
///
/// # Examples
///
/// ```rust
/// use transducers::{reduced, Step};
///
/// let going: Step<i32> = Step::Continue(42);
/// let stopped = reduced(7);
///
/// assert!(!going.is_reduced());
/// assert!(stopped.is_reduced());
/// assert_eq!(stopped.into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<A> {
    /// Keep reducing with this accumulator
    Continue(A),
    /// Stop reducing; this is the final accumulator
    Reduced(A),
}

/// Wrap `value` in the reduced signal.
#[inline]
pub fn reduced<A>(value: A) -> Step<A> {
    Step::Reduced(value)
}

/// Extract the accumulator whether or not it was reduced.
#[inline]
pub fn unreduced<A>(step: Step<A>) -> A {
    step.into_inner()
}

impl<A> Step<A> {
    /// Returns `true` if the step carries the reduced signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transducers::Step;
    ///
    /// let x: Step<i32> = Step::Reduced(42);
    /// assert!(x.is_reduced());
    ///
    /// let y: Step<i32> = Step::Continue(42);
    /// assert!(!y.is_reduced());
    /// ```
    #[inline]
    pub const fn is_reduced(&self) -> bool {
        matches!(self, Step::Reduced(_))
    }

    /// Returns `true` if reduction should go on.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Step::Continue(_))
    }

    /// Opens the step, discarding whether it was reduced.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(a) | Step::Reduced(a) => a,
        }
    }

    /// Converts from `Step<A>` to `Option<A>`, keeping only a `Reduced` value.
    #[inline]
    pub fn reduced_value(self) -> Option<A> {
        match self {
            Step::Continue(_) => None,
            Step::Reduced(a) => Some(a),
        }
    }

    /// Maps the accumulator while preserving the signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transducers::Step;
    ///
    /// let x: Step<i32> = Step::Reduced(5);
    /// assert_eq!(x.map(|v| v * 2), Step::Reduced(10));
    ///
    /// let y: Step<i32> = Step::Continue(3);
    /// assert_eq!(y.map(|v| v * 2), Step::Continue(6));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(a) => Step::Continue(f(a)),
            Step::Reduced(a) => Step::Reduced(f(a)),
        }
    }

    /// Feeds a continuing accumulator to `f`; a reduced step is passed through untouched.
    #[inline]
    pub fn and_then<F>(self, f: F) -> Step<A>
    where
        F: FnOnce(A) -> Step<A>,
    {
        match self {
            Step::Continue(a) => f(a),
            reduced @ Step::Reduced(_) => reduced,
        }
    }

    /// Marks the step as reduced. Already-reduced steps are not wrapped again.
    #[inline]
    pub fn ensure_reduced(self) -> Step<A> {
        Step::Reduced(self.into_inner())
    }

    /// Converts from `&Step<A>` to `Step<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&A> {
        match self {
            Step::Continue(a) => Step::Continue(a),
            Step::Reduced(a) => Step::Reduced(a),
        }
    }

    /// Returns the contained `Continue` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Reduced`.
    ///
    /// ```should_panic
    /// use transducers::Step;
    ///
    /// let x: Step<i32> = Step::Reduced(1);
    /// x.unwrap_continue(); // panics
    /// ```
    #[inline]
    pub fn unwrap_continue(self) -> A {
        match self {
            Step::Continue(a) => a,
            Step::Reduced(_) => panic!("called `Step::unwrap_continue()` on a `Reduced` value"),
        }
    }

    /// Returns the contained `Reduced` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Continue`.
    #[inline]
    pub fn unwrap_reduced(self) -> A {
        match self {
            Step::Continue(_) => panic!("called `Step::unwrap_reduced()` on a `Continue` value"),
            Step::Reduced(a) => a,
        }
    }
}
