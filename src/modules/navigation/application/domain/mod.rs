pub mod route;

pub use route::{title_for, NavItem, Navigation, Route, NAV_ITEMS};
