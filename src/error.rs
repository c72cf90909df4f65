use std::convert::Infallible;

use snafu::prelude::*;

/// Failures surfaced by a reconcile call.
///
/// The three validation variants are raised before any navigator call is made.
/// `Navigator` carries the navigator's own error untouched.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error<E>
where
    E: std::error::Error + 'static,
{
    #[snafu(display("prev route stack must be a sequence with at least one entry"))]
    PrecursorStackInvalid,

    #[snafu(display("next route stack must be a sequence with at least one entry"))]
    TargetStackInvalid,

    #[snafu(display("navigator must be defined"))]
    NavigatorMissing,

    #[snafu(display("navigator call failed: {source}"))]
    Navigator { source: E },
}

pub type Result<T, E = Infallible> = std::result::Result<T, Error<E>>;

/// Contract violations of the in-memory [`StackNavigator`](crate::StackNavigator).
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum StackError {
    #[snafu(display("cannot pop the root route"))]
    PopRoot,

    #[snafu(display("index {index} is out of bounds for a stack of {len} routes"))]
    IndexOutOfBounds { index: usize, len: usize },

    #[snafu(display("cannot reset to an empty route stack"))]
    EmptyReset,
}

/// Failure injected by the recording test double.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)), display("injected failure on navigator call #{call}"))]
pub struct InjectedFailure {
    pub call: usize,
}
