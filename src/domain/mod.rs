//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod pricing;
pub mod tax;

pub use entities::*;
pub use error::DomainError;
pub use pricing::{discount, discount_rate, matching_tier, DiscountTier, DISCOUNT_TIERS};
pub use tax::{unknown_state_warning, UsState};
