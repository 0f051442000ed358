//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (Diagnostics)
//! but are themselves concrete structs, not traits.

mod pricing;

pub use pricing::PricingService;
