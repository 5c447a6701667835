//! # Report Content
//!
//! The text of a scenario report, independent of how it is laid out.
//!
//! ## Document Outline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Invoicing Automation ROI Report                      ← header         │
//! │  Scenario: Q3 plan                                                     │
//! │                                                                         │
//! │  Inputs:                                              ← subheader      │
//! │   - Monthly Invoice Volume: 1000                                       │
//! │   - Number of AP Staff: N/A                   (falsy → N/A)            │
//! │   - ...                                                                │
//! │   - One-Time Implementation Cost: $50000      (falsy → 50000)          │
//! │                                                                         │
//! │  Results:                                             ← subheader      │
//! │   - Monthly Savings: $14,575                  (grouped)                │
//! │   - Payback Period: 3.4 months                                         │
//! │   - ROI (12 months): 249.8%                                            │
//! │   - Net Savings: $124,900                     (grouped)                │
//! │                                                                         │
//! │  Report generated: 10/17/2026, 3:04:05 PM                              │
//! │  <footer>                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input values are shown exactly as they were submitted: a field that was
//! never supplied reads `undefined`.

use chrono::{DateTime, Local};
use roi_core::format::{display_value, group_thousands, number_to_string};
use roi_core::validation::is_truthy;
use roi_core::{
    Scenario, AVG_HOURS_PER_INVOICE, ERROR_COST, ERROR_RATE_MANUAL, HOURLY_WAGE,
    MONTHLY_INVOICE_VOLUME, NUM_AP_STAFF, ONE_TIME_IMPLEMENTATION_COST, TIME_HORIZON_MONTHS,
};

/// Document title.
pub const REPORT_TITLE: &str = "Invoicing Automation ROI Report";

/// Closing line of every report.
pub const REPORT_FOOTER: &str = "Thank you for using the Invoicing Automation ROI Calculator!";

/// Timestamp layout, e.g. `10/17/2026, 3:04:05 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Shown for an implementation cost that is absent or falsy.
const FALLBACK_IMPLEMENTATION_COST: &str = "50000";

/// Typographic role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Header,
    Subheader,
    Body,
    /// Vertical gap, no text.
    Spacer,
}

/// Text of one scenario report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
    pub title: String,
    pub scenario_line: String,
    /// Eight labelled input lines.
    pub inputs: Vec<String>,
    /// Four labelled result lines.
    pub results: Vec<String>,
    pub generated_line: String,
    pub footer: String,
}

impl ReportContent {
    /// Builds the report text for a stored scenario.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let content = ReportContent::from_scenario(&scenario, Local::now());
    /// assert_eq!(content.results[0], "Monthly Savings: $14,575");
    /// ```
    pub fn from_scenario(scenario: &Scenario, generated_at: DateTime<Local>) -> Self {
        let raw = |field: &str| display_value(scenario.input(field));
        let or_fallback = |field: &str, fallback: &str| {
            let value = scenario.input(field);
            if is_truthy(value) {
                display_value(value)
            } else {
                fallback.to_string()
            }
        };

        let inputs = vec![
            format!("Monthly Invoice Volume: {}", raw(MONTHLY_INVOICE_VOLUME)),
            format!("Number of AP Staff: {}", or_fallback(NUM_AP_STAFF, "N/A")),
            format!(
                "Average Hours per Invoice (Manual): {}",
                raw(AVG_HOURS_PER_INVOICE)
            ),
            format!("Hourly Wage: ${}", raw(HOURLY_WAGE)),
            format!("Manual Error Rate: {}%", raw(ERROR_RATE_MANUAL)),
            format!("Error Fix Cost: ${}", raw(ERROR_COST)),
            format!("Time Horizon: {} months", raw(TIME_HORIZON_MONTHS)),
            format!(
                "One-Time Implementation Cost: ${}",
                or_fallback(ONE_TIME_IMPLEMENTATION_COST, FALLBACK_IMPLEMENTATION_COST)
            ),
        ];

        let results = &scenario.results;
        let results = vec![
            format!("Monthly Savings: ${}", group_thousands(results.monthly_savings)),
            format!(
                "Payback Period: {} months",
                number_to_string(results.payback_months)
            ),
            format!(
                "ROI ({} months): {}",
                raw(TIME_HORIZON_MONTHS),
                results.roi_percentage
            ),
            format!("Net Savings: ${}", group_thousands(results.net_savings)),
        ];

        ReportContent {
            title: REPORT_TITLE.to_string(),
            scenario_line: format!("Scenario: {}", scenario.name),
            inputs,
            results,
            generated_line: format!(
                "Report generated: {}",
                generated_at.format(TIMESTAMP_FORMAT)
            ),
            footer: REPORT_FOOTER.to_string(),
        }
    }

    /// Returns every line in document order with its style.
    ///
    /// List entries carry a `- ` bullet.
    pub fn lines(&self) -> Vec<(LineStyle, String)> {
        let mut lines = vec![
            (LineStyle::Header, self.title.clone()),
            (LineStyle::Body, self.scenario_line.clone()),
            (LineStyle::Spacer, String::new()),
            (LineStyle::Subheader, "Inputs:".to_string()),
        ];
        lines.extend(
            self.inputs
                .iter()
                .map(|line| (LineStyle::Body, format!("- {}", line))),
        );
        lines.push((LineStyle::Spacer, String::new()));
        lines.push((LineStyle::Subheader, "Results:".to_string()));
        lines.extend(
            self.results
                .iter()
                .map(|line| (LineStyle::Body, format!("- {}", line))),
        );
        lines.push((LineStyle::Spacer, String::new()));
        lines.push((LineStyle::Body, self.generated_line.clone()));
        lines.push((LineStyle::Spacer, String::new()));
        lines.push((LineStyle::Body, self.footer.clone()));
        lines
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
