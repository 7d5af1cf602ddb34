//! UI layer for the prelaunch window: app shell and theme.

pub mod app;
pub mod theme;

pub use app::PrelaunchApp;
