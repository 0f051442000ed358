//! Domain entities: core data structures

/// One sale as entered on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleInput {
    /// Number of articles sold
    pub quantity: f64,
    /// Price per article
    pub unit_price: f64,
    /// State where the sale happens, as typed by the user
    pub state_code: String,
}

impl SaleInput {
    pub fn new(quantity: f64, unit_price: f64, state_code: impl Into<String>) -> Self {
        Self {
            quantity,
            unit_price,
            state_code: state_code.into(),
        }
    }

    /// Quantity times unit price, before discount and tax.
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Every amount derived from a [`SaleInput`].
///
/// Holds `discounted_total = subtotal - discount_amount`,
/// `tax_amount = discounted_total * tax_rate` and
/// `final_total = discounted_total + tax_amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleResult {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub discounted_total: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub final_total: f64,
}

impl SaleResult {
    /// Derive the remaining amounts from a subtotal, its discount and a tax rate.
    pub fn from_parts(subtotal: f64, discount_amount: f64, tax_rate: f64) -> Self {
        let discounted_total = subtotal - discount_amount;
        let tax_amount = discounted_total * tax_rate;
        Self {
            subtotal,
            discount_amount,
            discounted_total,
            tax_rate,
            tax_amount,
            final_total: discounted_total + tax_amount,
        }
    }

    /// Tax rate as a percentage, rounded to four decimals (0.0685 -> 6.85).
    pub fn tax_percent(&self) -> f64 {
        (self.tax_rate * 100.0 * 10_000.0).round() / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_parts_when_deriving_then_totals_are_consistent() {
        let result = SaleResult::from_parts(6000.0, 300.0, 0.08);

        assert_eq!(result.discounted_total, 5700.0);
        assert_eq!(result.tax_amount, 456.0);
        assert_eq!(result.final_total, 6156.0);
    }

    #[test]
    fn given_utah_rate_when_formatting_percent_then_float_noise_is_dropped() {
        let result = SaleResult::from_parts(100.0, 0.0, 0.0685);
        assert_eq!(result.tax_percent(), 6.85);
        assert_eq!(result.tax_percent().to_string(), "6.85");
    }

    #[test]
    fn given_input_when_subtotal_then_multiplies() {
        let input = SaleInput::new(2.5, 4.0, "ut");
        assert_eq!(input.subtotal(), 10.0);
        assert_eq!(input.state_code, "ut");
    }
}
