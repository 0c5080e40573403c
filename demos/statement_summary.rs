//! Statement panel figures for a sample merchant statement

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use statement_figures::{
    format, utils::MemoryRecordSource, Merchant, PanelDesk, RefundAggregate, StatementRecord,
    StatementStatus, StoredCardTransactions, TransactionAggregate, TransactionDetail,
    TransactionStatus, TransactionType,
};
use std::str::FromStr;

fn detail(
    id: &str,
    day: u32,
    transaction_type: TransactionType,
    status: TransactionStatus,
    amount: &str,
) -> Result<TransactionDetail, Box<dyn std::error::Error>> {
    let amount = BigDecimal::from_str(amount)?;
    let commission = &amount * &BigDecimal::from_str("0.025")?;
    Ok(TransactionDetail {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, day),
        transaction_type,
        status,
        net_amount: &amount - &commission,
        bsmv: Some(&commission * &BigDecimal::from_str("0.05")?),
        amount,
        commission,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🧾 Statement Figures - Merchant Statement\n");

    let statement = StatementRecord {
        id: "EKS-2024-03-1001".to_string(),
        period: "Mart 2024".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid date")?,
        due_date: NaiveDate::from_ymd_opt(2024, 4, 15).ok_or("invalid date")?,
        status: StatementStatus::Pending,
        merchant: Merchant {
            id: "M-1001".to_string(),
            name: "Örnek Mağaza A.Ş.".to_string(),
            iban: "TR12 0006 4000 0011 2345 6789 01".to_string(),
            stored_card_commission: "2,50%".to_string(),
            payment_term: "T+1".to_string(),
            package: "Standart".to_string(),
        },
        stored_card_transactions: StoredCardTransactions::new(
            TransactionAggregate::new(100, BigDecimal::from(10000), BigDecimal::from(250)),
            RefundAggregate::new(2, BigDecimal::from(200)),
        ),
        card_form_transactions: None,
        hp_product_transactions: None,
        bsmv_amount: BigDecimal::from_str("12.5")?,
        other_fees: None,
        user_count: Some(64),
        frequency: Some(BigDecimal::from_str("1.56")?),
        transaction_details: vec![
            detail("TX-1", 2, TransactionType::StoredCard, TransactionStatus::Completed, "150")?,
            detail("TX-2", 3, TransactionType::Credit, TransactionStatus::Completed, "80")?,
            detail("TX-3", 4, TransactionType::Wallet, TransactionStatus::Refunded, "100")?,
            detail("TX-4", 9, TransactionType::StoredCard, TransactionStatus::Completed, "1249.90")?,
        ],
    };

    let source = MemoryRecordSource::new();
    source.insert_statement(statement)?;
    let desk = PanelDesk::new(source);

    let opened = desk.open_statement("EKS-2024-03-1001").await?;
    let panel = opened.panel();
    let summary = panel.summarize()?;

    println!("📊 Overview:");
    println!("  GMV:            {}", format::currency(&summary.overview.gmv));
    println!("  Orders:         {}", format::count(summary.overview.order_count));
    println!("  Average basket: {}", format::currency(&summary.overview.average_basket));
    println!();

    let commission = &summary.commission;
    println!("💳 Stored-card summary (rate {}):", format::percent(&commission.rate));
    for (label, row) in [
        ("Sales  ", &commission.breakdown.primary),
        ("Refunds", &commission.breakdown.refund),
        ("Total  ", &commission.breakdown.total),
    ] {
        println!(
            "  {label} {:>6} {:>14} {:>12} {:>10} {:>14}",
            format::signed_count(row.count),
            format::currency(&row.volume),
            format::currency(&row.commission),
            format::currency(&row.tax),
            format::currency(&row.net),
        );
    }
    println!();

    println!("💰 Commission due:");
    println!("  Net commission: {}", format::currency(&commission.due.net_commission));
    println!("  BSMV:           {}", format::currency(&commission.due.bsmv_amount));
    println!("  Total due:      {}", format::currency(&commission.due.total_due));
    println!("  Net payout:     {}", format::currency(&commission.net_payout));
    println!();

    println!("📄 Transactions:");
    for row in &summary.ledger_preview.rows {
        println!(
            "  {} {} {:?} {}",
            row.id,
            format::short_date(row.date),
            row.kind,
            format::currency(&row.amount)
        );
    }
    if summary.ledger_preview.remaining > 0 {
        println!("  ... and {} more", summary.ledger_preview.remaining);
    }

    let export = panel.ledger_export();
    println!(
        "\n🖨️  Export: {} page(s), {} row(s) for {}",
        export.page_count(),
        export.row_count(),
        export.header.period
    );

    Ok(())
}
