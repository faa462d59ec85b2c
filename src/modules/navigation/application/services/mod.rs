pub mod navigation_shell;

pub use navigation_shell::{LoginError, NavigationShell};
