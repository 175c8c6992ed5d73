//! Termfolio terminal window.
//!
//! Hosts a [`termfolio_core::Shell`] in a ratatui window: crossterm key
//! events in, a scrollback [`screen::Screen`] out, plus the incident alert
//! panel and the timers the core leaves to its display layer.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod exec;
pub mod keys;
pub mod logging;
pub mod screen;
pub mod theme;
pub mod views;
