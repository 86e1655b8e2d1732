//! Rarity table viewer and gear efficiency calculator.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
