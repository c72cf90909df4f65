//! Non-empty route stack view.

/// A borrowed route stack with at least one entry, root first.
#[derive(Debug)]
pub struct RouteStack<'a, R> {
    routes: &'a [R],
}

impl<R> Clone for RouteStack<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RouteStack<'_, R> {}

impl<'a, R> RouteStack<'a, R> {
    /// Wrap `routes`, or `None` if it is empty.
    pub fn new(routes: &'a [R]) -> Option<Self> {
        if routes.is_empty() {
            None
        } else {
            Some(Self { routes })
        }
    }

    pub fn as_slice(&self) -> &'a [R] {
        self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Never true: the constructor rejects empty slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&'a R> {
        self.routes.get(index)
    }

    /// The bottom route.
    pub fn root(&self) -> &'a R {
        &self.routes[0]
    }

    /// The visible route.
    pub fn top(&self) -> &'a R {
        &self.routes[self.routes.len() - 1]
    }

    /// Whether both views point at the same slice in memory.
    ///
    /// Always false for zero-sized routes: distinct slices of them share a
    /// dangling address.
    pub fn same_slice(&self, other: &RouteStack<'_, R>) -> bool {
        std::mem::size_of::<R>() != 0 && std::ptr::eq(self.routes, other.routes)
    }

    /// Length of the common prefix of `self` and `other` under `same`, given
    /// that the first `start` positions are already known to match.
    ///
    /// Stops at the first mismatch or at the end of the shorter stack.
    pub fn shared_prefix_len<F>(
        &self,
        other: &RouteStack<'_, R>,
        start: usize,
        mut same: F,
    ) -> usize
    where
        F: FnMut(&R, &R) -> bool,
    {
        let walked = self
            .routes
            .iter()
            .zip(other.routes)
            .skip(start)
            .take_while(|&(prev, next)| same(prev, next))
            .count();
        start.min(self.len()).min(other.len()) + walked
    }
}
