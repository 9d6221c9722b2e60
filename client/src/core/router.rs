//! Client-side page routing
//!
//! Declarative three-row route table mapping paths to page views. No
//! parameters, no guards, no async resolution. Navigation only changes
//! which page is active; profile state is untouched by it.

use crate::error::{ClientError, ClientResult};

/// Page views the client can mount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Main,
    Result,
    Stats,
}

impl Page {
    /// Path this page is mounted at
    pub fn path(self) -> &'static str {
        match self {
            Page::Main => "/",
            Page::Result => "/result",
            Page::Stats => "/stats",
        }
    }
}

/// One row of the route table
#[derive(Debug)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

/// The full route table
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "main",
        page: Page::Main,
    },
    Route {
        path: "/result",
        name: "result",
        page: Page::Result,
    },
    Route {
        path: "/stats",
        name: "stats",
        page: Page::Stats,
    },
];

/// Look up the page mounted at `path`
pub fn resolve(path: &str) -> Option<Page> {
    ROUTES.iter().find(|route| route.path == path).map(|route| route.page)
}

/// Tracks which page view is currently active
#[derive(Debug)]
pub struct Router {
    current: Page,
}

impl Router {
    /// New router with the main page active
    pub fn new() -> Self {
        Self {
            current: Page::Main,
        }
    }

    /// Currently active page
    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch the active page to the one mounted at `path`
    ///
    /// An unknown path leaves the current page unchanged.
    pub fn navigate(&mut self, path: &str) -> ClientResult<Page> {
        match resolve(path) {
            Some(page) => {
                tracing::debug!("📍 Navigating to {path}");
                self.current = page;
                Ok(page)
            }
            None => Err(ClientError::RouteNotFound {
                path: path.to_string(),
            }),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
