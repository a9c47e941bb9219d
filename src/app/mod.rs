//! Presentation layer: configuration, the interactive menu and table reports

pub mod config;
pub mod menu;
pub mod report;

pub use config::*;
pub use menu::Menu;
pub use report::*;
