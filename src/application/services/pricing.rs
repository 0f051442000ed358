//! Pricing service
//!
//! Applies the volume discount and the state sales tax to a sale.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{self, unknown_state_warning, SaleInput, SaleResult, UsState};
use crate::infrastructure::traits::Diagnostics;

/// Service computing sale totals.
///
/// Stateless apart from the diagnostic sink: identical inputs always
/// produce identical results.
pub struct PricingService {
    diagnostics: Arc<dyn Diagnostics>,
}

impl PricingService {
    /// Create a new pricing service.
    pub fn new(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Discount amount for a subtotal (0 below the lowest tier).
    pub fn discount(&self, subtotal: f64) -> f64 {
        let amount = domain::discount(subtotal);
        debug!(
            "discount: subtotal={} rate={} amount={}",
            subtotal,
            domain::discount_rate(subtotal),
            amount
        );
        amount
    }

    /// Sales-tax rate for a state code, case-insensitive.
    ///
    /// Unknown codes (empty included) yield 0 and emit one warning
    /// naming the code as given.
    pub fn tax_rate(&self, state_code: &str) -> f64 {
        match state_code.parse::<UsState>() {
            Ok(state) => {
                debug!("tax_rate: state={} rate={}", state, state.tax_rate());
                state.tax_rate()
            }
            Err(e) => {
                debug!("tax_rate: {}", e);
                self.diagnostics.warn(&unknown_state_warning(state_code));
                0.0
            }
        }
    }

    /// Final total for a sale: subtotal minus discount, plus tax.
    pub fn compute_total(&self, quantity: f64, unit_price: f64, state_code: &str) -> f64 {
        self.quote(&SaleInput::new(quantity, unit_price, state_code))
            .final_total
    }

    /// Full breakdown of a sale.
    pub fn quote(&self, input: &SaleInput) -> SaleResult {
        let subtotal = input.subtotal();
        debug!(
            "quote: quantity={} unit_price={} subtotal={}",
            input.quantity, input.unit_price, subtotal
        );

        let discount_amount = self.discount(subtotal);
        let tax_rate = self.tax_rate(&input.state_code);
        let result = SaleResult::from_parts(subtotal, discount_amount, tax_rate);

        debug!("quote: final_total={}", result.final_total);
        result
    }
}
