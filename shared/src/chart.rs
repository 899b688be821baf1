//! # Chart Data
//!
//! Turns a [`MonthlyLedger`] into the configuration the bar-chart renderer
//! draws from. Rendering itself happens in the frontend; everything here is
//! plain data so it can be checked without a canvas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::{EntryKind, Month, MonthlyLedger};

pub const CHART_TITLE: &str = "Monthly Income vs Expense";
pub const X_AXIS_TITLE: &str = "Month";
pub const Y_AXIS_TITLE: &str = "Amount ($)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const INCOME_COLOR: Rgba = Rgba::new(102, 126, 234, 0.8);
pub const EXPENSE_COLOR: Rgba = Rgba::new(220, 38, 38, 0.8);

/// One labelled series of bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: u32,
}

impl Dataset {
    fn for_kind(kind: EntryKind, data: Vec<f64>) -> Self {
        let background = match kind {
            EntryKind::Income => INCOME_COLOR,
            EntryKind::Expense => EXPENSE_COLOR,
        };
        Self {
            label: kind.label().to_string(),
            data,
            background,
            border: background.opaque(),
            border_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub x_title: String,
    pub y_title: String,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Income and expense bars for each month, in calendar order
    pub fn bar(ledger: &MonthlyLedger) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: CHART_TITLE.to_string(),
            labels: Month::ALL.iter().map(|m| m.name().to_string()).collect(),
            x_title: X_AXIS_TITLE.to_string(),
            y_title: Y_AXIS_TITLE.to_string(),
            datasets: vec![
                Dataset::for_kind(EntryKind::Income, ledger.income_series()),
                Dataset::for_kind(EntryKind::Expense, ledger.expense_series()),
            ],
        }
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.datasets.iter().flat_map(|d| d.data.iter().copied())
    }

    /// Top of the y axis, with 10% headroom. Never below 1.1.
    pub fn y_max(&self) -> f64 {
        self.values().fold(0.0_f64, f64::max).max(1.0) * 1.1
    }

    /// Bottom of the y axis: zero unless some amount is negative, then
    /// that amount with 10% headroom.
    pub fn y_min(&self) -> f64 {
        self.values().fold(0.0_f64, f64::min) * 1.1
    }
}

/// Download name for an exported chart, e.g. `income_expense_chart_2024-03-09.png`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("income_expense_chart_{}.png", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_spec_shape() {
        let mut ledger = MonthlyLedger::new();
        ledger.set_amount(EntryKind::Income, Month::January, 1000.5);
        let spec = ChartSpec::bar(&ledger);

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.title, "Monthly Income vs Expense");
        assert_eq!(spec.labels.len(), 12);
        assert_eq!(spec.labels[0], "January");
        assert_eq!(spec.datasets.len(), 2);

        let income = &spec.datasets[0];
        let expense = &spec.datasets[1];
        assert_eq!(income.label, "Income");
        assert_eq!(expense.label, "Expense");
        assert_eq!(income.data.len(), expense.data.len());
        assert_eq!(income.data[0], 1000.5);
        assert!(income.data[1..].iter().all(|v| *v == 0.0));
        assert!(expense.data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_dataset_colors() {
        let spec = ChartSpec::bar(&MonthlyLedger::new());
        assert_eq!(spec.datasets[0].background.css(), "rgba(102, 126, 234, 0.8)");
        assert_eq!(spec.datasets[0].border.css(), "rgba(102, 126, 234, 1)");
        assert_eq!(spec.datasets[1].background.css(), "rgba(220, 38, 38, 0.8)");
        assert_eq!(spec.datasets[1].border_width, 2);
    }

    #[test]
    fn test_y_max_has_headroom() {
        let mut ledger = MonthlyLedger::new();
        assert!((ChartSpec::bar(&ledger).y_max() - 1.1).abs() < 1e-9);

        ledger.set_amount(EntryKind::Expense, Month::August, 500.0);
        assert!((ChartSpec::bar(&ledger).y_max() - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_min_drops_below_zero_for_negative_amounts() {
        let mut ledger = MonthlyLedger::new();
        assert_eq!(ChartSpec::bar(&ledger).y_min(), 0.0);

        ledger.set_amount(EntryKind::Income, Month::March, 200.0);
        ledger.set_amount(EntryKind::Expense, Month::January, -5.0);
        let spec = ChartSpec::bar(&ledger);
        assert!((spec.y_min() + 5.5).abs() < 1e-9);
        assert!((spec.y_max() - 220.0).abs() < 1e-9);
        assert_eq!(spec.datasets[1].data[0], -5.0);
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "income_expense_chart_2024-03-09.png");
    }
}
