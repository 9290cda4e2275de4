//! DealerDesk console
//!
//! Thin presentation layer: runs the current month's reports against the
//! configured back-office API and prints the grouped tables.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dealerdesk_client::{HttpTransport, ReportApi, ReportView};
use dealerdesk_core::format;
use dealerdesk_core::reports::{GroupedReport, MonthlyBuckets, SalesSummary};
use dealerdesk_shared::session::{SessionProvider, StaticSession};
use dealerdesk_shared::types::{DateRange, ReportKind, ReportQuery};
use dealerdesk_shared::{AppConfig, SessionUser};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealerdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // The console authenticates with the configured token; a real front end
    // would plug its own session store in here.
    let session: Arc<dyn SessionProvider> = if config.api.token.is_some() {
        Arc::new(StaticSession::new(SessionUser {
            id: 0,
            name: "console".to_string(),
            role: "admin".to_string(),
        }))
    } else {
        Arc::new(StaticSession::anonymous())
    };

    let transport = Arc::new(HttpTransport::new(&config.api)?);
    let reports = ReportApi::new(transport, session);
    info!(base_url = %config.api.base_url, "connected to back-office API");

    let today = Utc::now().date_naive();
    let first_of_month = today.with_day(1).unwrap_or(today);
    let range = DateRange::new(first_of_month, today)?;

    let view = reports
        .run(ReportQuery {
            kind: ReportKind::SalesSummary,
            range,
        })
        .await?;
    if let ReportView::Sales(summary) = view {
        print_sales_summary(&range, &summary);
    }

    let view = reports
        .run(ReportQuery {
            kind: ReportKind::ExpenseBreakdown,
            range,
        })
        .await?;
    if let ReportView::Expenses(buckets) = view {
        print_expense_breakdown(&buckets);
    }

    Ok(())
}

fn print_sales_summary(range: &DateRange, summary: &SalesSummary) {
    println!(
        "Sales summary {} - {}",
        format::date(range.start),
        format::date(range.end)
    );
    print_group(&summary.sold);
    print_group(&summary.available);
    println!(
        "Grand total: purchase {} / expenses {}",
        format::currency(summary.grand.purchase),
        format::currency(summary.grand.expenses),
    );
    if let Some(profit) = summary.grand.profit {
        println!("Profit: {}", format::currency(profit));
    }
}

fn print_group(group: &GroupedReport) {
    println!("\n{} ({} cars)", group.label, group.count);
    for item in &group.items {
        let name = item.name.clone().unwrap_or_else(|| {
            format!("{} {}", item.make, item.model)
        });
        match item.sale_price {
            Some(sale) => println!("  {name}: sold for {}", format::currency(sale)),
            None => println!("  {name}: book value {}", format::currency(item.book_value())),
        }
    }
    println!(
        "  Subtotal: purchase {} / expenses {}{}",
        format::currency(group.totals.purchase),
        format::currency(group.totals.expenses),
        group
            .totals
            .profit
            .map(|p| format!(" / profit {}", format::currency(p)))
            .unwrap_or_default(),
    );
}

fn print_expense_breakdown(buckets: &MonthlyBuckets) {
    println!("\nExpenses by month");
    for bucket in &buckets.buckets {
        println!(
            "  {}: {} ({} records)",
            bucket.label,
            format::currency(bucket.total),
            bucket.count
        );
    }
    if buckets.excluded > 0 {
        println!("  ({} records skipped: unparsable dates)", buckets.excluded);
    }
}
