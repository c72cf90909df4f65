//! Route stack reconciliation.
//!
//! Given the stack a navigator currently shows and the stack it should show,
//! `StackReconciler` computes the navigator calls that get from one to the
//! other and issues them in order. The diff is a prefix walk:
//!
//! - if the root routes differ, the whole stack is reset in one call;
//! - otherwise every differing position both stacks share is replaced,
//!   extra target routes are pushed, and extra previous routes are popped.

use std::convert::Infallible;

use snafu::prelude::*;
use tracing::{debug, trace};

use crate::error::{
    NavigatorMissingSnafu, NavigatorSnafu, PrecursorStackInvalidSnafu, Result,
    TargetStackInvalidSnafu,
};
use crate::navigator::{Navigator, NavigatorCommand};
use crate::stack::RouteStack;

/// Decides whether a previous route and a target route at the same position
/// are the same screen.
pub trait RouteCompare<R> {
    fn same_route(&self, prev: &R, next: &R) -> bool;
}

/// Strict equality via `PartialEq`. The default comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictEq;

impl<R: PartialEq> RouteCompare<R> for StrictEq {
    fn same_route(&self, prev: &R, next: &R) -> bool {
        prev == next
    }
}

impl<R, F> RouteCompare<R> for F
where
    F: Fn(&R, &R) -> bool,
{
    fn same_route(&self, prev: &R, next: &R) -> bool {
        self(prev, next)
    }
}

/// Reconciles route stacks using the comparison strategy `C`.
///
/// # Example
/// ```
/// use nav_reconcile::{NavigatorCommand, StackReconciler};
///
/// let plan = StackReconciler::new().plan(&["a", "b"], &["a", "c", "d"]).unwrap();
/// assert_eq!(
///     plan,
///     vec![NavigatorCommand::ReplaceAtIndex("c", 1), NavigatorCommand::Push("d")]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StackReconciler<C = StrictEq> {
    compare: C,
}

impl StackReconciler<StrictEq> {
    pub fn new() -> Self {
        Self { compare: StrictEq }
    }
}

impl<C> StackReconciler<C> {
    /// Use `compare` instead of strict equality to match routes.
    pub fn with_compare(compare: C) -> Self {
        Self { compare }
    }

    /// Compute the navigator calls that turn `prev` into `next` without
    /// issuing them.
    pub fn plan<R>(&self, prev: &[R], next: &[R]) -> Result<Vec<NavigatorCommand<R>>>
    where
        R: Clone,
        C: RouteCompare<R>,
    {
        let (prev, next) = validate_stacks::<R, Infallible>(Some(prev), Some(next))?;
        Ok(self.diff(prev, next))
    }

    /// Bring `navigator` from `prev` to `next`.
    ///
    /// `None` stands for an absent argument and fails validation. Every check
    /// runs before the first navigator call. A navigator error stops the
    /// remaining calls and is returned as [`Error::Navigator`](crate::Error::Navigator).
    pub fn reconcile<R, N>(
        &self,
        prev: Option<&[R]>,
        next: Option<&[R]>,
        navigator: Option<&mut N>,
    ) -> Result<(), N::Error>
    where
        R: Clone,
        C: RouteCompare<R>,
        N: Navigator<R> + ?Sized,
    {
        let (prev, next) = validate_stacks::<R, N::Error>(prev, next)?;
        let Some(navigator) = navigator else {
            return NavigatorMissingSnafu.fail();
        };

        let commands = self.diff(prev, next);
        debug!(
            prev_len = prev.len(),
            next_len = next.len(),
            commands = commands.len(),
            "reconciling route stack"
        );

        commands
            .into_iter()
            .enumerate()
            .try_for_each(|(step, command)| {
                trace!(step, method = command.method(), "applying navigator command");
                command.apply(navigator)
            })
            .context(NavigatorSnafu)
    }

    fn diff<R>(&self, prev: RouteStack<'_, R>, next: RouteStack<'_, R>) -> Vec<NavigatorCommand<R>>
    where
        R: Clone,
        C: RouteCompare<R>,
    {
        if prev.same_slice(&next) {
            return Vec::new();
        }

        if !self.compare.same_route(prev.root(), next.root()) {
            debug!("root route diverged, resetting route stack");
            return vec![NavigatorCommand::ImmediatelyResetRouteStack(
                next.as_slice().to_vec(),
            )];
        }
        let shared = prev.shared_prefix_len(&next, 1, |a, b| self.compare.same_route(a, b));

        let prev = prev.as_slice();
        let next = next.as_slice();
        let overlap = prev.len().min(next.len());
        let mut commands = Vec::new();

        for index in shared..overlap {
            // `shared` is the first mismatch, already compared
            if index == shared || !self.compare.same_route(&prev[index], &next[index]) {
                commands.push(NavigatorCommand::ReplaceAtIndex(next[index].clone(), index));
            }
        }

        commands.extend(next[overlap..].iter().cloned().map(NavigatorCommand::Push));
        commands.extend((overlap..prev.len()).map(|_| NavigatorCommand::Pop));
        commands
    }
}

fn validate_stacks<'a, R, E>(
    prev: Option<&'a [R]>,
    next: Option<&'a [R]>,
) -> Result<(RouteStack<'a, R>, RouteStack<'a, R>), E>
where
    E: std::error::Error + 'static,
{
    let Some(prev) = prev.and_then(RouteStack::new) else {
        return PrecursorStackInvalidSnafu.fail();
    };
    let Some(next) = next.and_then(RouteStack::new) else {
        return TargetStackInvalidSnafu.fail();
    };
    Ok((prev, next))
}

/// Reconcile with strict equality.
pub fn reconcile<R, N>(prev: &[R], next: &[R], navigator: &mut N) -> Result<(), N::Error>
where
    R: Clone + PartialEq,
    N: Navigator<R> + ?Sized,
{
    StackReconciler::new().reconcile(Some(prev), Some(next), Some(navigator))
}

/// Reconcile with a caller-supplied route comparison.
pub fn reconcile_with<R, N, F>(
    prev: &[R],
    next: &[R],
    navigator: &mut N,
    compare: F,
) -> Result<(), N::Error>
where
    R: Clone,
    N: Navigator<R> + ?Sized,
    F: Fn(&R, &R) -> bool,
{
    StackReconciler::with_compare(compare).reconcile(Some(prev), Some(next), Some(navigator))
}
