//! Shared UI crate for Pulseboard: the dashboard dataset, its view-model
//! logic, and the Dioxus page rendered by the web and desktop launchers.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

/// Shared stylesheet. Web links it as an asset; desktop inlines the file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
