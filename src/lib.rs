//! Retail price calculator: volume discount tiers and state sales tax.
//!
//! Layers, innermost first: `domain` (tables and arithmetic), `application`
//! (services), `infrastructure` (I/O boundary traits, wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
