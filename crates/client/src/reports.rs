//! Report fetch adapter.
//!
//! Invokes the external report endpoints for a validated date range, decodes
//! the raw payload leniently, and hands rows to the aggregation engine. The
//! date range and session are checked before anything touches the network.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use dealerdesk_core::reports::{
    ExpenseRecord, GroupedReport, InventoryItem, MonthlyBuckets, ReportService, SalesSummary,
};
use dealerdesk_shared::error::{AppError, AppResult};
use dealerdesk_shared::session::SessionProvider;
use dealerdesk_shared::types::{DateRange, ReportKind, ReportQuery};

use crate::transport::Transport;

/// Raw report payload as returned by the API.
///
/// Echoes the requested range; `data` rows carry monetary fields as strings
/// or numbers, which the row types absorb at the decode boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportPayload<T> {
    /// Total record count reported by the API.
    #[serde(default)]
    pub total: u64,
    /// Echoed start date.
    pub from: NaiveDate,
    /// Echoed end date.
    pub to: NaiveDate,
    /// Raw rows for client-side aggregation.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// An aggregated report, ready to render.
#[derive(Debug, Clone)]
pub enum ReportView {
    /// Sold vs. available cars with profit figures.
    Sales(SalesSummary),
    /// Unsold cars valued at purchase price plus expenses.
    Inventory(GroupedReport),
    /// Expenses bucketed by month.
    Expenses(MonthlyBuckets),
}

/// Fetches raw report payloads and runs them through the engine.
pub struct ReportApi<T: Transport> {
    transport: Arc<T>,
    session: Arc<dyn SessionProvider>,
}

impl<T: Transport> ReportApi<T> {
    /// Creates an adapter over `transport` gated by `session`.
    pub fn new(transport: Arc<T>, session: Arc<dyn SessionProvider>) -> Self {
        Self { transport, session }
    }

    /// Runs the report selected by `query` and aggregates it for rendering.
    pub async fn run(&self, query: ReportQuery) -> AppResult<ReportView> {
        match query.kind {
            ReportKind::SalesSummary => {
                let payload = self.sales_report(query.range).await?;
                Ok(ReportView::Sales(ReportService::sales_summary(payload.data)))
            }
            ReportKind::InventoryValuation => {
                let payload = self.inventory_report(query.range).await?;
                let items = payload.data;
                let totals = ReportService::group_totals(&items, false);
                Ok(ReportView::Inventory(GroupedReport {
                    label: "On lot".to_string(),
                    count: items.len(),
                    totals,
                    items,
                }))
            }
            ReportKind::ExpenseBreakdown => {
                let payload = self.expense_report(query.range).await?;
                let buckets = ReportService::monthly_buckets(&payload.data);
                if buckets.excluded > 0 {
                    warn!(excluded = buckets.excluded, "expense rows with unparsable dates");
                }
                Ok(ReportView::Expenses(buckets))
            }
        }
    }

    /// Fetches the raw sales report rows for a date range.
    pub async fn sales_report(&self, range: DateRange) -> AppResult<ReportPayload<InventoryItem>> {
        self.fetch(ReportKind::SalesSummary, range).await
    }

    /// Fetches the raw inventory rows for a date range.
    pub async fn inventory_report(
        &self,
        range: DateRange,
    ) -> AppResult<ReportPayload<InventoryItem>> {
        self.fetch(ReportKind::InventoryValuation, range).await
    }

    /// Fetches the raw expense rows for a date range.
    pub async fn expense_report(&self, range: DateRange) -> AppResult<ReportPayload<ExpenseRecord>> {
        self.fetch(ReportKind::ExpenseBreakdown, range).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        kind: ReportKind,
        range: DateRange,
    ) -> AppResult<ReportPayload<R>> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized("no active session".into()));
        }

        let params = vec![
            ("from".to_string(), range.start.to_string()),
            ("to".to_string(), range.end.to_string()),
        ];
        debug!(report = kind.path(), from = %range.start, to = %range.end, "fetching report");

        let path = format!("reports/{}", kind.path());
        let value = match self.transport.get(&path, &params).await {
            Ok(value) => value,
            Err(err) => {
                if err.is_auth_failure() {
                    self.session.invalidate();
                }
                return Err(err);
            }
        };

        serde_json::from_value(value).map_err(|err| AppError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;
    use serde_json::json;

    use dealerdesk_shared::session::{SessionProvider, SessionUser, StaticSession};

    use super::*;
    use crate::transport::MockTransport;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
        .unwrap()
    }

    fn session() -> Arc<StaticSession> {
        Arc::new(StaticSession::new(SessionUser {
            id: 1,
            name: "Dana".to_string(),
            role: "admin".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_sales_report_decodes_string_amounts() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .withf(|path, params| {
                path == "reports/sales-summary"
                    && params
                        == [
                            ("from".to_string(), "2025-01-01".to_string()),
                            ("to".to_string(), "2025-01-31".to_string()),
                        ]
            })
            .returning(|_, _| {
                Ok(json!({
                    "total": 1,
                    "from": "2025-01-01",
                    "to": "2025-01-31",
                    "data": [{
                        "id": 1,
                        "make": "Toyota",
                        "model": "Yaris",
                        "status": "reserved",
                        "purchase_price": "18000",
                        "expense_total": "500.00",
                        "sale_price": "20000"
                    }]
                }))
            });

        let api = ReportApi::new(Arc::new(transport), session());
        let payload = api.sales_report(range()).await.unwrap();

        assert_eq!(payload.total, 1);
        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.data[0].purchase_price, dec!(18000));
        assert!(payload.data[0].is_sold());
    }

    #[tokio::test]
    async fn test_run_aggregates_sales_summary() {
        let mut transport = MockTransport::new();
        transport.expect_get().returning(|_, _| {
            Ok(json!({
                "from": "2025-01-01",
                "to": "2025-01-31",
                "data": [
                    {"id": 1, "make": "A", "model": "a", "status": "sold",
                     "purchase_price": 18000, "expense_total": 500, "sale_price": 20000},
                    {"id": 2, "make": "B", "model": "b", "status": "available",
                     "purchase_price": 10000, "expense_total": 200}
                ]
            }))
        });

        let api = ReportApi::new(Arc::new(transport), session());
        let query = ReportQuery {
            kind: ReportKind::SalesSummary,
            range: range(),
        };

        let ReportView::Sales(summary) = api.run(query).await.unwrap() else {
            panic!("expected sales view");
        };
        assert_eq!(summary.sold.count, 1);
        assert_eq!(summary.sold.totals.profit, Some(dec!(1500)));
        assert_eq!(summary.available.count, 1);
    }

    #[tokio::test]
    async fn test_unauthenticated_never_hits_network() {
        let mut transport = MockTransport::new();
        transport.expect_get().never();

        let api = ReportApi::new(
            Arc::new(transport),
            Arc::new(StaticSession::anonymous()) as Arc<dyn SessionProvider>,
        );
        let err = api.sales_report(range()).await.unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_auth_failure_invalidates_session() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Err(AppError::Unauthorized("token expired".into())));

        let session = session();
        let api = ReportApi::new(Arc::new(transport), session.clone());
        let err = api.sales_report(range()).await.unwrap_err();

        assert!(err.is_auth_failure());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_decode_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Ok(json!({"unexpected": true})));

        let api = ReportApi::new(Arc::new(transport), session());
        let err = api.expense_report(range()).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
