//! # Calculator Module
//!
//! The ROI projection for invoice-automation adoption.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Projection Pipeline                                │
//! │                                                                         │
//! │  labor_cost_manual = volume × hours × wage                             │
//! │  auto_cost         = volume × 0.20                                     │
//! │  error_savings     = (rate/100 − 0.001) × volume × error_cost          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  monthly_savings   = (labor_cost_manual + error_savings − auto_cost)   │
//! │                      × 1.1                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cumulative        = monthly_savings × horizon                         │
//! │  net               = cumulative − implementation_cost                  │
//! │       │                                                                 │
//! │       ├── cost <= 0 ──► payback 0, ROI "Infinite"                      │
//! │       │                                                                 │
//! │       └── otherwise ──► payback = cost / monthly_savings               │
//! │                         ROI     = net / cost × 100                     │
//! │                                                                         │
//! │  Rounding happens once, at the very end.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Zero or negative monthly savings are not guarded: payback becomes
//! infinite or negative and is reported as such.

use crate::types::{BusinessInputs, RoiPercentage, RoiResults};
use crate::{AUTOMATED_COST_PER_INVOICE, AUTOMATED_ERROR_RATE, SAVINGS_BOOST_FACTOR};

// =============================================================================
// Projection
// =============================================================================

/// Computes the ROI projection for a set of business inputs.
///
/// Pure and deterministic: identical inputs always yield identical results.
///
/// ## Example
/// ```rust
/// use roi_core::{compute, BusinessInputs, RoiPercentage};
///
/// let inputs = BusinessInputs {
///     monthly_invoice_volume: 1000.0,
///     avg_hours_per_invoice: 0.5,
///     hourly_wage: 25.0,
///     error_rate_manual: 2.0,
///     error_cost: 50.0,
///     time_horizon_months: 12.0,
///     one_time_implementation_cost: Some(0.0),
///     num_ap_staff: None,
/// };
///
/// let results = compute(&inputs);
/// assert_eq!(results.payback_months, 0.0);
/// assert_eq!(results.roi_percentage, RoiPercentage::Infinite);
/// ```
pub fn compute(inputs: &BusinessInputs) -> RoiResults {
    let volume = inputs.monthly_invoice_volume;
    let implementation_cost = inputs.implementation_cost();

    let labor_cost_manual = volume * inputs.avg_hours_per_invoice * inputs.hourly_wage;
    let auto_cost = volume * AUTOMATED_COST_PER_INVOICE;
    let error_savings =
        ((inputs.error_rate_manual / 100.0) - AUTOMATED_ERROR_RATE) * volume * inputs.error_cost;

    let monthly_savings = ((labor_cost_manual + error_savings) - auto_cost) * SAVINGS_BOOST_FACTOR;
    let cumulative_savings = monthly_savings * inputs.time_horizon_months;
    let net_savings = cumulative_savings - implementation_cost;

    let (payback_months, roi_percentage) = if implementation_cost <= 0.0 {
        (0.0, RoiPercentage::Infinite)
    } else {
        let roi = (net_savings / implementation_cost) * 100.0;
        (
            implementation_cost / monthly_savings,
            RoiPercentage::Percent(round_to_tenth(roi)),
        )
    };

    RoiResults {
        monthly_savings: round_half_up(monthly_savings),
        cumulative_savings: round_half_up(cumulative_savings),
        net_savings: round_half_up(net_savings),
        payback_months: round_to_tenth(payback_months),
        roi_percentage,
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to the nearest integer, with halves going toward +∞.
///
/// ## Why Not `f64::round`?
/// ```text
/// value    f64::round   round_half_up
/// ─────    ──────────   ─────────────
///  2.5         3              3
/// -2.5        -3             -2        ← ties always move up
/// ```
/// Non-finite values pass through unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to one decimal place using [`round_half_up`].
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::number_to_string;

    fn reference_inputs() -> BusinessInputs {
        BusinessInputs {
            monthly_invoice_volume: 1000.0,
            avg_hours_per_invoice: 0.5,
            hourly_wage: 25.0,
            error_rate_manual: 2.0,
            error_cost: 50.0,
            time_horizon_months: 12.0,
            one_time_implementation_cost: Some(50000.0),
            num_ap_staff: None,
        }
    }

    #[test]
    fn test_reference_projection() {
        let results = compute(&reference_inputs());

        assert_eq!(results.monthly_savings, 14575.0);
        assert_eq!(results.cumulative_savings, 174900.0);
        assert_eq!(results.net_savings, 124900.0);
        assert_eq!(results.payback_months, 3.4);
        assert_eq!(results.roi_percentage.to_string(), "249.8%");
    }

    #[test]
    fn test_missing_cost_uses_default() {
        let mut inputs = reference_inputs();
        inputs.one_time_implementation_cost = None;

        assert_eq!(compute(&inputs), compute(&reference_inputs()));
    }

    #[test]
    fn test_zero_cost_is_infinite_regardless_of_inputs() {
        let mut inputs = reference_inputs();
        inputs.one_time_implementation_cost = Some(0.0);
        inputs.hourly_wage = -10.0;

        let results = compute(&inputs);
        assert_eq!(results.payback_months, 0.0);
        assert_eq!(results.roi_percentage, RoiPercentage::Infinite);
    }

    #[test]
    fn test_negative_cost_is_infinite() {
        let mut inputs = reference_inputs();
        inputs.one_time_implementation_cost = Some(-1.0);

        let results = compute(&inputs);
        assert_eq!(results.roi_percentage, RoiPercentage::Infinite);
        assert_eq!(results.net_savings, 174901.0);
    }

    #[test]
    fn test_num_ap_staff_does_not_affect_results() {
        let mut inputs = reference_inputs();
        inputs.num_ap_staff = Some(12.0);

        assert_eq!(compute(&inputs), compute(&reference_inputs()));
    }

    #[test]
    fn test_zero_savings_payback_is_infinite() {
        // Labour exactly offsets the automated cost: 100 × 0.002 × 100 = 20
        let inputs = BusinessInputs {
            monthly_invoice_volume: 100.0,
            avg_hours_per_invoice: 0.002,
            hourly_wage: 100.0,
            error_rate_manual: 0.1,
            error_cost: 10.0,
            time_horizon_months: 12.0,
            one_time_implementation_cost: Some(1000.0),
            num_ap_staff: None,
        };

        let results = compute(&inputs);
        assert!(results.payback_months.is_infinite());
        assert_eq!(results.roi_percentage.to_string(), "-100%");
    }

    #[test]
    fn test_negative_savings_propagate() {
        let inputs = BusinessInputs {
            monthly_invoice_volume: 1000.0,
            avg_hours_per_invoice: 0.0,
            hourly_wage: 0.0,
            error_rate_manual: 0.1,
            error_cost: 0.0,
            time_horizon_months: 10.0,
            one_time_implementation_cost: Some(1000.0),
            num_ap_staff: None,
        };

        let results = compute(&inputs);
        assert_eq!(results.monthly_savings, -220.0);
        assert_eq!(results.cumulative_savings, -2200.0);
        assert_eq!(results.net_savings, -3200.0);
        assert_eq!(results.payback_months, -4.5);
        assert_eq!(results.roi_percentage.to_string(), "-320%");
    }

    #[test]
    fn test_nan_inputs_propagate() {
        let mut inputs = reference_inputs();
        inputs.hourly_wage = f64::NAN;

        let results = compute(&inputs);
        assert!(results.monthly_savings.is_nan());
        assert_eq!(results.roi_percentage.to_string(), "NaN%");
    }

    #[test]
    fn test_compute_is_deterministic() {
        let inputs = reference_inputs();
        let first = compute(&inputs);
        for _ in 0..10 {
            assert_eq!(compute(&inputs), first);
        }
    }

    #[test]
    fn test_output_precision() {
        let inputs = BusinessInputs {
            monthly_invoice_volume: 777.0,
            avg_hours_per_invoice: 0.37,
            hourly_wage: 31.3,
            error_rate_manual: 3.3,
            error_cost: 17.9,
            time_horizon_months: 7.0,
            one_time_implementation_cost: Some(12345.0),
            num_ap_staff: Some(3.0),
        };

        let results = compute(&inputs);
        for whole in [
            results.monthly_savings,
            results.cumulative_savings,
            results.net_savings,
        ] {
            assert_eq!(whole.fract(), 0.0);
        }

        let payback = number_to_string(results.payback_months);
        assert!(payback.split('.').nth(1).map_or(true, |d| d.len() <= 1));

        let roi = results.roi_percentage.to_string();
        assert!(roi.ends_with('%'));
        let digits = roi.trim_end_matches('%');
        assert!(digits.split('.').nth(1).map_or(true, |d| d.len() <= 1));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-0.4), -0.0);
        assert!(round_half_up(f64::INFINITY).is_infinite());
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(3.4305), 3.4);
        assert_eq!(round_to_tenth(249.8), 249.8);
        assert_eq!(round_to_tenth(-4.55), -4.5);
    }
}
