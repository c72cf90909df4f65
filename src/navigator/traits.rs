//! Navigator capability set and the commands the reconciler emits against it.

use std::fmt;

/// The mutation primitives a stack navigator exposes.
///
/// Implemented by real navigators and by test doubles that record calls.
/// Each method either applies fully or returns the navigator's own error.
pub trait Navigator<R> {
    type Error: std::error::Error + 'static;

    /// Append `route` as the new top of the stack.
    fn push(&mut self, route: R) -> Result<(), Self::Error>;

    /// Replace the entry at `index` with `route`. Stack length is unchanged.
    fn replace_at_index(&mut self, route: R, index: usize) -> Result<(), Self::Error>;

    /// Remove the top entry.
    fn pop(&mut self) -> Result<(), Self::Error>;

    /// Discard the whole stack and replace it with `routes` in one step.
    fn immediately_reset_route_stack(&mut self, routes: Vec<R>) -> Result<(), Self::Error>;
}

/// One navigator call, carrying exactly what is needed to replay it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorCommand<R> {
    Push(R),
    ReplaceAtIndex(R, usize),
    Pop,
    ImmediatelyResetRouteStack(Vec<R>),
}

impl<R> NavigatorCommand<R> {
    /// Replay this command on `navigator`.
    pub fn apply<N>(self, navigator: &mut N) -> Result<(), N::Error>
    where
        N: Navigator<R> + ?Sized,
    {
        match self {
            NavigatorCommand::Push(route) => navigator.push(route),
            NavigatorCommand::ReplaceAtIndex(route, index) => {
                navigator.replace_at_index(route, index)
            }
            NavigatorCommand::Pop => navigator.pop(),
            NavigatorCommand::ImmediatelyResetRouteStack(routes) => {
                navigator.immediately_reset_route_stack(routes)
            }
        }
    }

    /// Name of the navigator method this command calls.
    pub fn method(&self) -> &'static str {
        match self {
            NavigatorCommand::Push(_) => "push",
            NavigatorCommand::ReplaceAtIndex(..) => "replaceAtIndex",
            NavigatorCommand::Pop => "pop",
            NavigatorCommand::ImmediatelyResetRouteStack(_) => "immediatelyResetRouteStack",
        }
    }
}

/// Renders the call-history form, e.g. `replaceAtIndex C 1` or
/// `immediatelyResetRouteStack B,C`.
impl<R: fmt::Display> fmt::Display for NavigatorCommand<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.method())?;
        match self {
            NavigatorCommand::Push(route) => write!(f, " {route}"),
            NavigatorCommand::ReplaceAtIndex(route, index) => write!(f, " {route} {index}"),
            NavigatorCommand::Pop => Ok(()),
            NavigatorCommand::ImmediatelyResetRouteStack(routes) => {
                f.write_str(" ")?;
                for (i, route) in routes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{route}")?;
                }
                Ok(())
            }
        }
    }
}
