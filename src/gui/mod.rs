// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod router;
pub mod sections;

pub use app::run;
