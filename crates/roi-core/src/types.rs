//! # Domain Types
//!
//! Record types shared by the calculator, the store and the HTTP layer.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐  compute()  ┌──────────────────────┐         │
//! │  │   BusinessInputs     │ ──────────► │     RoiResults       │         │
//! │  │  ──────────────────  │             │  ──────────────────  │         │
//! │  │  invoice volume      │             │  monthly_savings     │         │
//! │  │  hours / wage        │             │  cumulative_savings  │         │
//! │  │  error rate / cost   │             │  net_savings         │         │
//! │  │  horizon (months)    │             │  payback_months      │         │
//! │  │  impl. cost (opt)    │             │  roi_percentage      │         │
//! │  └──────────────────────┘             └──────────────────────┘         │
//! │            ▲                                     │                      │
//! │            │ from_record (raw JSON)              │ snapshot             │
//! │            │                                     ▼                      │
//! │  ┌──────────────────────────────────────────────────────────────┐      │
//! │  │  Scenario: id (UUID) · name (unique) · inputs (raw record)   │      │
//! │  │            results (frozen at creation) · created_at         │      │
//! │  └──────────────────────────────────────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Loose Numbers
//! Request bodies are not type-checked. A field may hold a number, a numeric
//! string, a boolean or `null`; [`to_number`] coerces each of them the same
//! way every time so that the projection stays deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::format::{coerce_text, number_to_string, parse_number};
use crate::DEFAULT_IMPLEMENTATION_COST;

// =============================================================================
// Field Names
// =============================================================================

pub const MONTHLY_INVOICE_VOLUME: &str = "monthly_invoice_volume";
pub const AVG_HOURS_PER_INVOICE: &str = "avg_hours_per_invoice";
pub const HOURLY_WAGE: &str = "hourly_wage";
pub const ERROR_RATE_MANUAL: &str = "error_rate_manual";
pub const ERROR_COST: &str = "error_cost";
pub const TIME_HORIZON_MONTHS: &str = "time_horizon_months";
pub const ONE_TIME_IMPLEMENTATION_COST: &str = "one_time_implementation_cost";
pub const NUM_AP_STAFF: &str = "num_ap_staff";

/// Fields a simulation cannot run without, in canonical order.
pub const REQUIRED_INPUT_FIELDS: [&str; 6] = [
    MONTHLY_INVOICE_VOLUME,
    AVG_HOURS_PER_INVOICE,
    HOURLY_WAGE,
    ERROR_RATE_MANUAL,
    ERROR_COST,
    TIME_HORIZON_MONTHS,
];

// =============================================================================
// Business Inputs
// =============================================================================

/// The business figures a projection is computed from.
///
/// Transient: built per request from the raw body, never stored in this form.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BusinessInputs {
    /// Invoices processed per month.
    pub monthly_invoice_volume: f64,

    /// Manual handling time per invoice, in hours.
    pub avg_hours_per_invoice: f64,

    /// Fully loaded hourly cost of AP staff.
    pub hourly_wage: f64,

    /// Manual error rate in percentage points (2 = 2%).
    pub error_rate_manual: f64,

    /// Cost of fixing one error.
    pub error_cost: f64,

    /// Projection horizon in months.
    pub time_horizon_months: f64,

    /// One-time cost of adopting automation. `None` means "use the default".
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub one_time_implementation_cost: Option<f64>,

    /// Head count of the AP team. Display only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub num_ap_staff: Option<f64>,
}

impl BusinessInputs {
    /// Builds inputs from a raw request record.
    ///
    /// ## Coercion Rules
    /// ```text
    /// field absent        → NaN   (implementation cost: None → 50000)
    /// null                → 0
    /// true / false        → 1 / 0
    /// "  42 " / ""        → 42 / 0
    /// "0x1A"              → 26
    /// "abc", "inf", [..]  → NaN
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use roi_core::BusinessInputs;
    /// use serde_json::json;
    ///
    /// let record = json!({ "monthly_invoice_volume": "1000", "hourly_wage": 25 });
    /// let inputs = BusinessInputs::from_record(record.as_object().unwrap());
    ///
    /// assert_eq!(inputs.monthly_invoice_volume, 1000.0);
    /// assert!(inputs.error_cost.is_nan());
    /// assert_eq!(inputs.implementation_cost(), 50000.0);
    /// ```
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let number = |field: &str| to_number(record.get(field));

        BusinessInputs {
            monthly_invoice_volume: number(MONTHLY_INVOICE_VOLUME),
            avg_hours_per_invoice: number(AVG_HOURS_PER_INVOICE),
            hourly_wage: number(HOURLY_WAGE),
            error_rate_manual: number(ERROR_RATE_MANUAL),
            error_cost: number(ERROR_COST),
            time_horizon_months: number(TIME_HORIZON_MONTHS),
            one_time_implementation_cost: record
                .get(ONE_TIME_IMPLEMENTATION_COST)
                .map(|v| to_number(Some(v))),
            num_ap_staff: record.get(NUM_AP_STAFF).map(|v| to_number(Some(v))),
        }
    }

    /// Returns the implementation cost, falling back to the default.
    #[inline]
    pub fn implementation_cost(&self) -> f64 {
        self.one_time_implementation_cost
            .unwrap_or(DEFAULT_IMPLEMENTATION_COST)
    }

    /// Converts the inputs back into a raw record (as a request body would
    /// carry them).
    pub fn to_record(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Coerces a raw JSON value into a number.
///
/// See [`BusinessInputs::from_record`] for the rules.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => coerce_text(s),
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

// =============================================================================
// ROI Percentage
// =============================================================================

/// The ROI figure of a projection.
///
/// ## Wire Form
/// ```text
/// Infinite          ──► "Infinite"     (implementation cost <= 0)
/// Percent(249.8)    ──► "249.8%"
/// Percent(NaN)      ──► "NaN%"
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoiPercentage {
    /// Nothing was invested, so any savings are an unbounded return.
    Infinite,
    /// Net savings over implementation cost, in percent, one decimal.
    Percent(f64),
}

impl fmt::Display for RoiPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiPercentage::Infinite => write!(f, "Infinite"),
            RoiPercentage::Percent(pct) => write!(f, "{}%", number_to_string(*pct)),
        }
    }
}

impl FromStr for RoiPercentage {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if s == "Infinite" {
            return Ok(RoiPercentage::Infinite);
        }

        s.strip_suffix('%')
            .and_then(parse_number)
            .map(RoiPercentage::Percent)
            .ok_or_else(|| CoreError::InvalidRoiPercentage(s.to_string()))
    }
}

impl Serialize for RoiPercentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoiPercentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// ROI Results
// =============================================================================

/// Output of the calculation engine.
///
/// Numbers are already rounded. Non-finite values survive in memory and
/// appear as `null` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoiResults {
    /// Boosted monthly savings, whole currency units.
    #[serde(with = "wire_number")]
    #[ts(type = "number | null")]
    pub monthly_savings: f64,

    /// Monthly savings times the horizon, whole currency units.
    #[serde(with = "wire_number")]
    #[ts(type = "number | null")]
    pub cumulative_savings: f64,

    /// Cumulative savings minus implementation cost, whole currency units.
    #[serde(with = "wire_number")]
    #[ts(type = "number | null")]
    pub net_savings: f64,

    /// Months until the implementation cost is recovered, one decimal.
    #[serde(with = "wire_number")]
    #[ts(type = "number | null")]
    pub payback_months: f64,

    /// `"Infinite"` or `"<pct>%"`.
    #[ts(type = "string")]
    pub roi_percentage: RoiPercentage,
}

/// JSON encoding for result numbers.
///
/// Integral values are written as integers (`14575`, not `14575.0`) and
/// non-finite values as `null`; `null` reads back as NaN.
mod wire_number {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Largest integer an f64 holds exactly.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if !value.is_finite() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

// =============================================================================
// Scenario
// =============================================================================

/// A named, persisted snapshot of inputs and the results computed from them.
///
/// `results` is fixed at creation; later changes to the calculation never
/// rewrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Unique display label.
    pub name: String,

    /// The raw input record as supplied at creation.
    pub inputs: Value,

    /// Results computed at creation time.
    pub results: RoiResults,

    /// When the store accepted the scenario.
    pub created_at: DateTime<Utc>,
}

impl Scenario {
    /// Returns the id/name pair used in listings.
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Returns a single raw input field.
    #[inline]
    pub fn input(&self, field: &str) -> Option<&Value> {
        self.inputs.get(field)
    }
}

/// Listing entry for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number_coercion() {
        assert_eq!(to_number(Some(&json!(12.5))), 12.5);
        assert_eq!(to_number(Some(&json!(" 42 "))), 42.0);
        assert_eq!(to_number(Some(&json!(""))), 0.0);
        assert_eq!(to_number(Some(&json!(null))), 0.0);
        assert_eq!(to_number(Some(&json!(true))), 1.0);
        assert!(to_number(Some(&json!("abc"))).is_nan());
        assert!(to_number(Some(&json!("infinity"))).is_nan());
        assert_eq!(to_number(Some(&json!("0x1A"))), 26.0);
        assert!(to_number(Some(&json!([1]))).is_nan());
        assert!(to_number(None).is_nan());
    }

    #[test]
    fn test_from_record_optional_fields() {
        let record = json!({
            "monthly_invoice_volume": 1000,
            "one_time_implementation_cost": 0,
        });
        let inputs = BusinessInputs::from_record(record.as_object().unwrap());

        assert_eq!(inputs.one_time_implementation_cost, Some(0.0));
        assert_eq!(inputs.implementation_cost(), 0.0);
        assert_eq!(inputs.num_ap_staff, None);
        assert!(inputs.hourly_wage.is_nan());
    }

    #[test]
    fn test_inputs_record_round_trip_skips_absent_options() {
        let record = json!({
            "monthly_invoice_volume": 500,
            "avg_hours_per_invoice": 0.25,
            "hourly_wage": 30,
            "error_rate_manual": 1.5,
            "error_cost": 40,
            "time_horizon_months": 24,
        });
        let inputs = BusinessInputs::from_record(record.as_object().unwrap());
        let back = inputs.to_record();

        assert!(!back.contains_key(ONE_TIME_IMPLEMENTATION_COST));
        assert_eq!(BusinessInputs::from_record(&back), inputs);
    }

    #[test]
    fn test_roi_percentage_display_and_parse() {
        assert_eq!(RoiPercentage::Infinite.to_string(), "Infinite");
        assert_eq!(RoiPercentage::Percent(249.8).to_string(), "249.8%");
        assert_eq!(RoiPercentage::Percent(-100.0).to_string(), "-100%");

        assert_eq!("Infinite".parse::<RoiPercentage>().unwrap(), RoiPercentage::Infinite);
        assert_eq!(
            "249.8%".parse::<RoiPercentage>().unwrap(),
            RoiPercentage::Percent(249.8)
        );
        assert!("249.8".parse::<RoiPercentage>().is_err());
        assert!("lots%".parse::<RoiPercentage>().is_err());
    }

    #[test]
    fn test_results_wire_format() {
        let results = RoiResults {
            monthly_savings: 14575.0,
            cumulative_savings: 174900.0,
            net_savings: 124900.0,
            payback_months: 3.4,
            roi_percentage: RoiPercentage::Percent(249.8),
        };

        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(
            json,
            r#"{"monthly_savings":14575,"cumulative_savings":174900,"net_savings":124900,"payback_months":3.4,"roi_percentage":"249.8%"}"#
        );

        let back: RoiResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn test_non_finite_results_serialize_as_null() {
        let results = RoiResults {
            monthly_savings: 0.0,
            cumulative_savings: 0.0,
            net_savings: -50000.0,
            payback_months: f64::INFINITY,
            roi_percentage: RoiPercentage::Percent(-100.0),
        };

        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["payback_months"], Value::Null);
        assert_eq!(value["net_savings"], json!(-50000));

        let back: RoiResults = serde_json::from_value(value).unwrap();
        assert!(back.payback_months.is_nan());
    }

    #[test]
    fn test_scenario_summary() {
        let scenario = Scenario {
            id: "id-1".to_string(),
            name: "Baseline".to_string(),
            inputs: json!({ "hourly_wage": 25 }),
            results: RoiResults {
                monthly_savings: 1.0,
                cumulative_savings: 12.0,
                net_savings: -49988.0,
                payback_months: 50000.0,
                roi_percentage: RoiPercentage::Percent(-100.0),
            },
            created_at: Utc::now(),
        };

        assert_eq!(scenario.summary().name, "Baseline");
        assert_eq!(scenario.input(HOURLY_WAGE), Some(&json!(25)));
        assert_eq!(scenario.input(ERROR_COST), None);
    }
}
