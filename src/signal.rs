//! A single reactive storage cell.
//!
//! A [`SignalCell`] holds either a literal value or an expression. Expressions are evaluated
//! lazily on [`SignalCell::get`] and memoized until the cell is invalidated or written.
//!
//! Invariants:
//!
//! 1. A read returns a value consistent with the most recent write. A write that lands while an
//!    expression is being evaluated wins: the in-flight result is returned to its reader but
//!    never cached.
//! 2. An expression is evaluated at most once per dirty period.
//! 3. A failed evaluation is not cached and leaves the cell dirty.
//! 4. Every value stored in the cell went through [`Signalable::parse`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::error::{EvaluationError, ParseError};
use crate::interpolation::InterpolationFunction;
use crate::value::{PossibleValue, Signalable};

type Expression<T> = Rc<dyn Fn() -> Result<PossibleValue<T>, EvaluationError>>;

enum State<T: Signalable> {
    Literal(T),
    Computed {
        expression: Expression<T>,
        cached: Option<T>,
        dirty: bool,
    },
}

struct SignalInner<T: Signalable> {
    state: State<T>,
    /// The value the cell was created with, restored by `reset`.
    initial: T,
    /// Bumped by every write, invalidation and recomputation.
    version: u64,
    /// Set while the expression runs, to detect reads of the cell from its own expression.
    evaluating: bool,
}

/// Clears the `evaluating` flag when an evaluation ends, including by unwinding.
struct EvaluationGuard<'a, T: Signalable>(&'a RefCell<SignalInner<T>>);

impl<T: Signalable> Drop for EvaluationGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.0.try_borrow_mut() {
            inner.evaluating = false;
        }
    }
}

/// A typed, lazily evaluated, cacheable reactive cell.
///
/// Cloning a `SignalCell` creates a new handle to the **same** cell. Reads return owned
/// clones, no reference into the cache ever escapes.
pub struct SignalCell<T: Signalable> {
    inner: Rc<RefCell<SignalInner<T>>>,
    interpolation: InterpolationFunction<T>,
}

impl<T: Signalable> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            interpolation: Rc::clone(&self.interpolation),
        }
    }
}

impl<T: Signalable> fmt::Debug for SignalCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let mut s = f.debug_struct("SignalCell");
        match &inner.state {
            State::Literal(value) => s.field("literal", value),
            State::Computed { cached, dirty, .. } => {
                s.field("cached", cached).field("dirty", dirty)
            }
        };
        s.field("version", &inner.version).finish()
    }
}

impl<T: Signalable> SignalCell<T> {
    /// Create a cell holding the literal `initial`, bound to `interpolation`.
    pub fn new(initial: T, interpolation: InterpolationFunction<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                state: State::Literal(initial.clone()),
                initial,
                version: 0,
                evaluating: false,
            })),
            interpolation,
        }
    }

    /// Replace the cell's content by a literal. The value is parsed first: on failure the cell
    /// is left untouched.
    pub fn set(&self, value: impl Into<PossibleValue<T>>) -> Result<(), ParseError> {
        let value = T::parse(value.into())?;
        self.write(State::Literal(value));
        Ok(())
    }

    /// Replace the cell's content by an expression. It is evaluated on the next read.
    pub fn set_expression<F, V>(&self, expression: F)
    where
        F: Fn() -> V + 'static,
        V: Into<PossibleValue<T>>,
    {
        self.set_fallible_expression(move || Ok(expression()))
    }

    /// Like [`SignalCell::set_expression`], for expressions that may fail. Errors are returned
    /// from [`SignalCell::get`].
    pub fn set_fallible_expression<F, V>(&self, expression: F)
    where
        F: Fn() -> Result<V, EvaluationError> + 'static,
        V: Into<PossibleValue<T>>,
    {
        let expression: Expression<T> = Rc::new(move || expression().map(Into::into));
        self.write(State::Computed {
            expression,
            cached: None,
            dirty: true,
        });
    }

    fn write(&self, state: State<T>) {
        let mut inner = self.inner.borrow_mut();
        inner.state = state;
        inner.version += 1;
    }

    /// Read the current value, evaluating the expression if the cell is dirty.
    pub fn get(&self) -> Result<T, EvaluationError> {
        let (expression, version) = {
            let mut inner = self.inner.borrow_mut();
            let expression = match &inner.state {
                State::Literal(value) => return Ok(value.clone()),
                State::Computed {
                    cached: Some(value),
                    dirty: false,
                    ..
                } => return Ok(value.clone()),
                State::Computed { expression, .. } => Rc::clone(expression),
            };

            if inner.evaluating {
                debug!("signal read from its own expression");
                return Err(EvaluationError::Cycle);
            }
            inner.evaluating = true;

            (expression, inner.version)
        };

        let _guard = EvaluationGuard(&self.inner);
        trace!("evaluating signal expression (version {version})");

        let value = match expression().and_then(|value| Ok(T::parse(value)?)) {
            Ok(value) => value,
            Err(err) => {
                debug!("signal evaluation failed: {err}");
                return Err(err);
            }
        };

        let mut inner = self.inner.borrow_mut();
        if inner.version == version {
            if let State::Computed { cached, dirty, .. } = &mut inner.state {
                *cached = Some(value.clone());
                *dirty = false;
            }
            inner.version += 1;
        } else {
            trace!("signal was written during evaluation, result not cached");
        }

        Ok(value)
    }

    /// Mark a computed cell as stale, e.g. because an upstream value changed. The next read
    /// evaluates the expression again. Literal cells are not affected.
    pub fn invalidate(&self) {
        let mut inner = self.inner.borrow_mut();
        let version = inner.version;
        if let State::Computed { dirty, .. } = &mut inner.state {
            if !*dirty {
                debug!("invalidating signal (version {version})");
            }
            *dirty = true;
            inner.version += 1;
        }
    }

    /// Counter bumped by every write, invalidation and recomputation.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Whether the next read evaluates the expression. Always `false` for literals.
    pub fn is_dirty(&self) -> bool {
        matches!(
            self.inner.borrow().state,
            State::Computed { dirty: true, .. }
        )
    }

    /// Whether the cell holds an expression rather than a literal.
    pub fn is_computed(&self) -> bool {
        matches!(self.inner.borrow().state, State::Computed { .. })
    }

    /// Restore the value the cell was created with.
    pub fn reset(&self) {
        let initial = self.inner.borrow().initial.clone();
        self.write(State::Literal(initial));
    }

    /// Whether the cell holds the literal it was created with.
    pub fn is_initial(&self) -> bool {
        let inner = self.inner.borrow();
        match &inner.state {
            State::Literal(value) => *value == inner.initial,
            State::Computed { .. } => false,
        }
    }

    /// Replace an expression by its current value.
    pub fn save(&self) -> Result<(), EvaluationError> {
        let value = self.get()?;
        self.write(State::Literal(value));
        Ok(())
    }

    /// The interpolation function the cell was created with.
    pub fn interpolation(&self) -> InterpolationFunction<T> {
        Rc::clone(&self.interpolation)
    }
}
