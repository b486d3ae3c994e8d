//! The metric interface shared by evaluation drivers.

use crate::core::errors::EvalResult;

/// A stateful metric that accumulates over an evaluation run.
///
/// Drivers call [`clear`](Metric::clear) at the start of a run, feed every
/// batch through [`update`](Metric::update), and read the result with
/// [`eval`](Metric::eval). Reading never resets the state.
pub trait Metric<'a> {
    /// The batch type accepted by `update`.
    type Input;
    /// The scores produced by `eval`.
    type Output;

    /// Resets the accumulated state.
    fn clear(&mut self);

    /// Folds one batch into the accumulated state.
    ///
    /// A failed update leaves the state untouched.
    fn update(&mut self, input: Self::Input) -> EvalResult<()>;

    /// Computes the scores for everything accumulated since the last `clear`.
    fn eval(&self) -> EvalResult<Self::Output>;
}
