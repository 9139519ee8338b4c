//! Folio - a single-page personal portfolio.
//!
//! The page is composed once per frame from static content by
//! [`page::compose`] and then drawn either in the terminal ([`ui`]) or as a
//! static HTML document ([`html`]).
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod html;
pub mod input;
pub mod logging;
pub mod page;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
