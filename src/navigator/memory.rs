//! In-memory navigator holding a concrete route stack.

use snafu::prelude::*;
use tracing::trace;

use super::traits::Navigator;
use crate::error::{EmptyResetSnafu, IndexOutOfBoundsSnafu, PopRootSnafu, StackError};

/// A navigator that owns its route stack.
///
/// The stack is never empty: the root route can be replaced but not popped.
///
/// # Example
/// ```
/// use nav_reconcile::{Navigator, StackNavigator};
///
/// let mut nav = StackNavigator::new("home");
/// nav.push("settings").unwrap();
/// assert_eq!(nav.current(), &"settings");
/// nav.pop().unwrap();
/// assert_eq!(nav.routes(), &["home"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackNavigator<R> {
    routes: Vec<R>,
}

impl<R> StackNavigator<R> {
    /// Create a navigator whose stack holds only `root`.
    pub fn new(root: R) -> Self {
        Self { routes: vec![root] }
    }

    /// Create a navigator from an existing stack. Returns `None` for an empty one.
    pub fn from_routes(routes: Vec<R>) -> Option<Self> {
        if routes.is_empty() {
            None
        } else {
            Some(Self { routes })
        }
    }

    /// The whole stack, root first.
    pub fn routes(&self) -> &[R] {
        &self.routes
    }

    /// The visible (top) route.
    pub fn current(&self) -> &R {
        // non-empty by construction
        &self.routes[self.routes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Never true: the root route cannot be popped.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if there's a route below the current one.
    pub fn can_go_back(&self) -> bool {
        self.routes.len() > 1
    }
}

impl<R> Navigator<R> for StackNavigator<R> {
    type Error = StackError;

    fn push(&mut self, route: R) -> Result<(), StackError> {
        self.routes.push(route);
        trace!(len = self.routes.len(), "pushed route");
        Ok(())
    }

    fn replace_at_index(&mut self, route: R, index: usize) -> Result<(), StackError> {
        let len = self.routes.len();
        let slot = self
            .routes
            .get_mut(index)
            .context(IndexOutOfBoundsSnafu { index, len })?;
        *slot = route;
        trace!(index, "replaced route");
        Ok(())
    }

    fn pop(&mut self) -> Result<(), StackError> {
        ensure!(self.can_go_back(), PopRootSnafu);
        self.routes.pop();
        trace!(len = self.routes.len(), "popped route");
        Ok(())
    }

    fn immediately_reset_route_stack(&mut self, routes: Vec<R>) -> Result<(), StackError> {
        ensure!(!routes.is_empty(), EmptyResetSnafu);
        self.routes = routes;
        trace!(len = self.routes.len(), "reset route stack");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestRoute {
        Home,
        Settings,
        Profile,
    }

    #[test]
    fn test_stack_navigation() {
        let mut nav = StackNavigator::new(TestRoute::Home);

        assert_eq!(nav.current(), &TestRoute::Home);
        assert!(!nav.can_go_back());

        nav.push(TestRoute::Settings).unwrap();
        assert_eq!(nav.current(), &TestRoute::Settings);
        assert!(nav.can_go_back());

        nav.push(TestRoute::Profile).unwrap();
        assert_eq!(nav.len(), 3);

        nav.pop().unwrap();
        assert_eq!(nav.current(), &TestRoute::Settings);

        nav.pop().unwrap();
        assert_eq!(nav.current(), &TestRoute::Home);
    }

    #[test]
    fn test_pop_root_is_rejected() {
        let mut nav = StackNavigator::new(TestRoute::Home);
        assert_eq!(nav.pop(), Err(StackError::PopRoot));
        assert_eq!(nav.routes(), &[TestRoute::Home]);
    }

    #[test]
    fn test_replace_at_index() {
        let mut nav =
            StackNavigator::from_routes(vec![TestRoute::Home, TestRoute::Settings]).unwrap();
        nav.replace_at_index(TestRoute::Profile, 0).unwrap();
        assert_eq!(nav.routes(), &[TestRoute::Profile, TestRoute::Settings]);

        assert_eq!(
            nav.replace_at_index(TestRoute::Home, 2),
            Err(StackError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_reset_route_stack() {
        let mut nav = StackNavigator::new(TestRoute::Home);
        nav.immediately_reset_route_stack(vec![TestRoute::Settings, TestRoute::Profile])
            .unwrap();
        assert_eq!(nav.routes(), &[TestRoute::Settings, TestRoute::Profile]);

        assert_eq!(
            nav.immediately_reset_route_stack(Vec::new()),
            Err(StackError::EmptyReset)
        );
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn test_never_empty() {
        let mut nav = StackNavigator::new(TestRoute::Home);
        assert!(!nav.is_empty());
        let _ = nav.pop();
        assert!(!nav.is_empty());
        assert_eq!(nav.len(), 1);
    }

    #[test]
    fn test_from_empty_routes() {
        assert!(StackNavigator::<TestRoute>::from_routes(Vec::new()).is_none());
    }
}
