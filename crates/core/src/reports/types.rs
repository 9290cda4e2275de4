//! Report data types.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealerdesk_shared::types::lenient;

/// Administrative status of a car record.
///
/// This is what the back office last set on the record. Report grouping does
/// NOT trust it: a car counts as sold when a sale linkage is present, whatever
/// this field says (see [`InventoryItem::is_sold`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// On the lot and purchasable.
    Available,
    /// Held for a prospective buyer.
    Reserved,
    /// Marked sold.
    Sold,
    /// Any other (or unrecognized) status string.
    #[default]
    #[serde(other)]
    Other,
}

/// A car record as surfaced to reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Record ID.
    pub id: u64,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Manufacturer.
    pub make: String,
    /// Model.
    pub model: String,
    /// Administrative status.
    #[serde(default)]
    pub status: ItemStatus,
    /// Purchase price; the API may send this as a numeric string.
    #[serde(default, deserialize_with = "lenient::de_decimal")]
    pub purchase_price: Decimal,
    /// Accumulated expense total for this car.
    #[serde(default, deserialize_with = "lenient::de_decimal")]
    pub expense_total: Decimal,
    /// When the record was created.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Sale price, when an invoice exists.
    #[serde(default, deserialize_with = "lenient::de_decimal_opt")]
    pub sale_price: Option<Decimal>,
    /// Invoice ID, when an invoice exists.
    #[serde(default)]
    pub invoice_id: Option<u64>,
    /// Sale date, when known.
    #[serde(default, deserialize_with = "lenient::de_date_opt")]
    pub sold_at: Option<NaiveDate>,
    /// Buyer name, when known.
    #[serde(default)]
    pub buyer: Option<String>,
}

impl InventoryItem {
    /// Sale-linkage rule: a car is sold for grouping purposes iff a sale
    /// price or invoice reference is present. `status` can disagree (e.g.
    /// "reserved" with a sale price) and the linkage wins.
    #[must_use]
    pub const fn is_sold(&self) -> bool {
        self.sale_price.is_some() || self.invoice_id.is_some()
    }

    /// Purchase price plus accumulated expenses.
    #[must_use]
    pub fn book_value(&self) -> Decimal {
        self.purchase_price + self.expense_total
    }
}

/// An expense row as surfaced to reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Record ID.
    pub id: u64,
    /// Non-empty description.
    pub description: String,
    /// Expense amount; the API may send this as a numeric string.
    #[serde(default, deserialize_with = "lenient::de_decimal")]
    pub amount: Decimal,
    /// Expense date; `None` when the transported value did not parse.
    #[serde(default, deserialize_with = "lenient::de_date_opt")]
    pub expense_date: Option<NaiveDate>,
    /// When the record was created.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// When the record was last updated.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Result of splitting inventory into available vs. sold.
///
/// Order is preserved within each group; every input item lands in exactly
/// one group.
#[derive(Debug, Clone, Default)]
pub struct StatusPartition {
    /// Cars without a sale linkage.
    pub available: Vec<InventoryItem>,
    /// Cars with a sale linkage.
    pub sold: Vec<InventoryItem>,
}

/// Subtotals for one report group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupTotals {
    /// Sum of purchase prices.
    pub purchase: Decimal,
    /// Sum of accumulated expenses.
    pub expenses: Decimal,
    /// Sum of sale prices; `None` for unsold groups.
    pub sale: Option<Decimal>,
    /// Sale minus purchase minus expenses; `None` for unsold groups.
    pub profit: Option<Decimal>,
}

/// One labeled group of a report, with its subtotals.
///
/// Derived and transient: built fresh on every report generation, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedReport {
    /// Human-readable group label.
    pub label: String,
    /// Number of member records.
    pub count: usize,
    /// Group subtotals.
    pub totals: GroupTotals,
    /// Member records, in input order.
    pub items: Vec<InventoryItem>,
}

/// The sales summary view: both groups plus grand totals.
#[derive(Debug, Clone, Serialize)]
pub struct SalesSummary {
    /// Cars with a sale linkage.
    pub sold: GroupedReport,
    /// Cars without one.
    pub available: GroupedReport,
    /// Totals over both groups; sale and profit cover the sold group only.
    pub grand: GroupTotals,
}

/// One month of bucketed expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    /// Label of the form "January 2025".
    pub label: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Sum of expense amounts in this month.
    pub total: Decimal,
    /// Number of expenses in this month.
    pub count: usize,
}

/// Monthly expense buckets plus an account of excluded rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlyBuckets {
    /// Buckets in ascending chronological order, at most twelve.
    pub buckets: Vec<MonthlyBucket>,
    /// Rows dropped because their date did not parse. Dropped rows are
    /// missing from both totals and counts, never silently zeroed in.
    pub excluded: usize,
}
