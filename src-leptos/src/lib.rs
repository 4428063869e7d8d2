//! Portfolio - Leptos Frontend Library

pub mod app;
pub mod components;
pub mod formatters;
pub mod motion;
pub mod pages;
pub mod stars;
pub mod state;
