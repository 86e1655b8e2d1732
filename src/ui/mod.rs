//! Dioxus components and pages.

pub mod components;
pub mod format;
pub mod pages;
pub mod shell;
pub mod theme;
