//! Report aggregation service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{
    ExpenseRecord, GroupTotals, GroupedReport, InventoryItem, MonthlyBucket, MonthlyBuckets,
    SalesSummary, StatusPartition,
};
use crate::format;

/// Maximum number of months kept in an expense breakdown.
pub const MAX_MONTHLY_BUCKETS: usize = 12;

/// Service for turning flat report rows into grouped, totaled views.
pub struct ReportService;

impl ReportService {
    /// Splits inventory into available vs. sold using the sale-linkage rule.
    ///
    /// Classification ignores the administrative status field: an item with a
    /// sale price or invoice reference is sold, everything else is available.
    /// Input order is preserved within each group; no item is dropped or
    /// duplicated. Empty input yields two empty groups.
    #[must_use]
    pub fn partition_by_status(items: Vec<InventoryItem>) -> StatusPartition {
        let mut partition = StatusPartition::default();
        for item in items {
            if item.is_sold() {
                partition.sold.push(item);
            } else {
                partition.available.push(item);
            }
        }
        partition
    }

    /// Computes subtotals for one group.
    ///
    /// Sale and profit are reported only when `sold` is set; profit is
    /// computed totals-then-subtract (sale total minus purchase total minus
    /// expense total), the same order used by every report type. A missing
    /// sale price on a sold row contributes zero to the sale total. An empty
    /// group totals to zero across the board.
    #[must_use]
    pub fn group_totals(items: &[InventoryItem], sold: bool) -> GroupTotals {
        let purchase = Self::sum_field(items, |i| Some(i.purchase_price));
        let expenses = Self::sum_field(items, |i| Some(i.expense_total));
        let (sale, profit) = if sold {
            let sale = Self::sum_field(items, |i| i.sale_price);
            (Some(sale), Some(sale - purchase - expenses))
        } else {
            (None, None)
        };

        GroupTotals {
            purchase,
            expenses,
            sale,
            profit,
        }
    }

    /// Builds the full sales summary: both groups plus grand totals.
    #[must_use]
    pub fn sales_summary(items: Vec<InventoryItem>) -> SalesSummary {
        let StatusPartition { available, sold } = Self::partition_by_status(items);

        let sold_totals = Self::group_totals(&sold, true);
        let available_totals = Self::group_totals(&available, false);

        let grand = GroupTotals {
            purchase: sold_totals.purchase + available_totals.purchase,
            expenses: sold_totals.expenses + available_totals.expenses,
            sale: sold_totals.sale,
            profit: sold_totals.profit,
        };

        SalesSummary {
            sold: GroupedReport {
                label: "Sold".to_string(),
                count: sold.len(),
                totals: sold_totals,
                items: sold,
            },
            available: GroupedReport {
                label: "Available".to_string(),
                count: available.len(),
                totals: available_totals,
                items: available,
            },
            grand,
        }
    }

    /// Buckets expenses by calendar month, ascending, capped at the
    /// [`MAX_MONTHLY_BUCKETS`] most recent months.
    ///
    /// Rows whose date did not parse are excluded from both totals and
    /// counts and tallied in `excluded` instead of corrupting a bucket.
    #[must_use]
    pub fn monthly_buckets(expenses: &[ExpenseRecord]) -> MonthlyBuckets {
        use chrono::Datelike;

        let mut months: BTreeMap<(i32, u32), (Decimal, usize)> = BTreeMap::new();
        let mut excluded = 0;

        for expense in expenses {
            let Some(date) = expense.expense_date else {
                excluded += 1;
                continue;
            };
            let entry = months.entry((date.year(), date.month())).or_default();
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let skip = months.len().saturating_sub(MAX_MONTHLY_BUCKETS);
        let buckets = months
            .into_iter()
            .skip(skip)
            .map(|((year, month), (total, count))| MonthlyBucket {
                label: format::month_label(year, month),
                year,
                month,
                total,
                count,
            })
            .collect();

        MonthlyBuckets { buckets, excluded }
    }

    /// Sums a selected field across records with a zero fallback.
    ///
    /// Records for which the selector yields `None` (null, absent, or
    /// non-numeric at the decode boundary) contribute zero. Decimal
    /// arithmetic has no NaN, so the result is always a well-defined number.
    #[must_use]
    pub fn sum_field<T, F>(records: &[T], selector: F) -> Decimal
    where
        F: Fn(&T) -> Option<Decimal>,
    {
        records
            .iter()
            .map(|record| selector(record).unwrap_or(Decimal::ZERO))
            .sum()
    }
}
