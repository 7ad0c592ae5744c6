//! Page routing state.
//!
//! Maps the four site routes to views and keeps an in-memory navigation
//! history so "back" affordances behave like a browser. Nothing here is
//! persisted; history lives and dies with the process.

/// The four routes of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Contact,
    ExploreWork,
}

impl Route {
    /// Label used in the navbar.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Contact => "Contact",
            Route::ExploreWork => "Explore Work",
        }
    }

    /// All routes in navbar order.
    pub fn all() -> [Route; 4] {
        [Route::Home, Route::Services, Route::Contact, Route::ExploreWork]
    }
}

/// Current route plus the back stack.
#[derive(Debug, Clone)]
pub struct RouteState {
    current: Route,
    history: Vec<Route>,
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteState {
    /// Starts at Home with empty history.
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigates to a route, pushing the previous one onto the history.
    /// Navigating to the current route is a no-op (no history entry).
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        self.history.push(self.current);
        self.current = route;
    }

    /// Pops the history, returning to the previous route. No-op when empty.
    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let routes = RouteState::new();
        assert_eq!(routes.current(), Route::Home);
        assert!(!routes.can_go_back());
    }

    #[test]
    fn navigate_and_back() {
        let mut routes = RouteState::new();
        routes.navigate(Route::Services);
        routes.navigate(Route::ExploreWork);
        assert_eq!(routes.current(), Route::ExploreWork);

        routes.back();
        assert_eq!(routes.current(), Route::Services);
        routes.back();
        assert_eq!(routes.current(), Route::Home);

        // Back on an empty history stays put.
        routes.back();
        assert_eq!(routes.current(), Route::Home);
    }

    #[test]
    fn renavigating_to_current_route_adds_no_history() {
        let mut routes = RouteState::new();
        routes.navigate(Route::Contact);
        routes.navigate(Route::Contact);
        routes.back();
        assert_eq!(routes.current(), Route::Home);
        assert!(!routes.can_go_back());
    }
}
