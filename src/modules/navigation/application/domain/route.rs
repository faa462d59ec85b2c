use std::fmt;

/// Every screen of the console, keyed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Projects,
    Skills,
    About,
    Blogs,
    Experience,
    Testimonials,
    Services,
    Messages,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Login,
        Route::Dashboard,
        Route::Projects,
        Route::Skills,
        Route::About,
        Route::Blogs,
        Route::Experience,
        Route::Testimonials,
        Route::Services,
        Route::Messages,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Projects => "/projects",
            Route::Skills => "/skills",
            Route::About => "/about",
            Route::Blogs => "/blogs",
            Route::Experience => "/experience",
            Route::Testimonials => "/testimonials",
            Route::Services => "/services",
            Route::Messages => "/messages",
        }
    }

    /// Exact match only. A trailing slash is tolerated except on `/`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The screen that ends up on display.
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(r) | Navigation::Redirect(r) => *r,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

/// Sidebar entries in display order.
pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { route: Route::Dashboard, label: "Dashboard" },
    NavItem { route: Route::Projects, label: "Projects" },
    NavItem { route: Route::Skills, label: "Skills" },
    NavItem { route: Route::About, label: "About" },
    NavItem { route: Route::Blogs, label: "Blogs" },
    NavItem { route: Route::Experience, label: "Experience" },
    NavItem { route: Route::Testimonials, label: "Testimonials" },
    NavItem { route: Route::Services, label: "Services" },
    NavItem { route: Route::Messages, label: "Messages" },
];

/// Page heading for a path; anything without a sidebar entry is titled
/// `Dashboard`.
pub fn title_for(path: &str) -> &'static str {
    Route::from_path(path)
        .and_then(|route| NAV_ITEMS.iter().find(|item| item.route == route))
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}
