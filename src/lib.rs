//! Route stack reconciliation for stack navigators.
//!
//! [`StackReconciler`] turns a previous route stack and a target route stack
//! into the smallest run of [`Navigator`] calls (push, replace-at-index, pop,
//! or a full reset) and issues them in order.

pub mod error;
pub mod navigator;
pub mod reconcile;
pub mod stack;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Error, Result, StackError};
pub use navigator::{Navigator, NavigatorCommand, StackNavigator};
pub use reconcile::{reconcile, reconcile_with, RouteCompare, StackReconciler, StrictEq};
pub use stack::RouteStack;
