//! Application shell configuration.
//!
//! The browser build has no environment to read from, so everything here is
//! compiled-in defaults that embedders may override before mounting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the host element the app renders into.
pub const DEFAULT_MOUNT_ID: &str = "app";
pub const DEFAULT_TITLE: &str = "Simple Bank";
pub const DEFAULT_STYLESHEET: &str = "/pkg/bank-web.css";

/// Settings consumed once by `app::mount`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub mount_id: String,
    pub title: String,
    pub stylesheet_href: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            stylesheet_href: DEFAULT_STYLESHEET.to_owned(),
        }
    }
}

impl ShellConfig {
    /// Same defaults, rendered into a different host element.
    pub fn with_mount_id(mut self, mount_id: impl Into<String>) -> Self {
        self.mount_id = mount_id.into();
        self
    }
}
