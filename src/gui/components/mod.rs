// src/gui/components/mod.rs
pub mod login;
pub mod nav;
pub mod status_bar;
pub mod time_badges;
