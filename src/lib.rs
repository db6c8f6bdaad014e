// src/lib.rs

#[macro_use]
pub mod macros;

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;

#[macro_use]
pub mod log;
pub mod query;
pub mod session;
pub mod text;
pub mod validate;

pub mod gui;
