//! Progressive bracket engine for cantonal income tax
//!
//! The whole net salary is taxed at the single rate belonging to the highest
//! bracket threshold the salary exceeds; per-bracket slices are not summed.

/// Income at or below this amount is tax free (CHF)
pub const TAX_FREE_LIMIT: f64 = 24_000.0;
/// Width of each bracket above the tax-free limit (CHF)
pub const BRACKET_WIDTH: f64 = 8_000.0;
/// Rate applied in the first bracket (percent)
pub const ENTRY_RATE: f64 = 4.0;
/// Rate increase per bracket (percent)
pub const RATE_STEP: f64 = 2.0;
/// The walk stops before this rate; 30% is the highest rate ever applied
pub const RATE_CAP: f64 = 32.0;

/// Result of a tax calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxResult {
    /// Tax owed (CHF, unrounded; callers format for display)
    pub tax: f64,
    /// Rate applied to the whole salary (percent, 1 decimal place)
    pub percentage: f64,
}

impl TaxResult {
    const ZERO: TaxResult = TaxResult {
        tax: 0.0,
        percentage: 0.0,
    };
}

/// Calculate income tax on a net salary.
///
/// Pure and total: any input (negative, zero, huge) yields a well-formed
/// result. Walks the bracket ladder from the tax-free limit upwards,
/// recomputing the tax at each rate the salary qualifies for; the last
/// qualifying rate wins and is returned as `percentage`.
pub fn calculate_tax(net_salary: f64) -> TaxResult {
    if net_salary <= TAX_FREE_LIMIT {
        return TaxResult::ZERO;
    }

    let mut rate = ENTRY_RATE;
    let mut threshold = TAX_FREE_LIMIT;
    let mut applied_rate = 0.0;
    let mut tax = 0.0;

    while rate < RATE_CAP && threshold < net_salary {
        if net_salary > threshold {
            applied_rate = rate;
            tax = net_salary * rate / 100.0;
        }
        threshold += BRACKET_WIDTH;
        rate += RATE_STEP;
    }

    TaxResult {
        tax,
        percentage: round1(applied_rate),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
