//! Receipt panel figures, including a recalculated net amount

use statement_figures::{format, ReceiptPanel, ReceiptRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("🧾 Statement Figures - Payment Receipt\n");

    let receipt: ReceiptRecord = serde_json::from_str(
        r#"{
            "id": "DK-2024-0042",
            "date": "2024-05-02",
            "description": "Nisan 2024 cüzdan hakedişi",
            "status": "completed",
            "walletTransactions": { "count": 40, "volume": "1000", "commission": "100", "netAmount": "850" },
            "creditTransactions": { "count": 6, "volume": "300", "commission": "9", "netAmount": "291" }
        }"#,
    )?;

    let figures = ReceiptPanel::new(&receipt).figures();

    println!("👛 Wallet transactions:");
    println!("  Volume:     {}", format::currency(&figures.total_volume));
    println!("  Commission: {}", format::currency(&figures.total_commission));
    println!("  Net:        {}", format::currency(&figures.wallet.value));
    if figures.recalculated {
        println!("  * Net amount recalculated as volume minus commission.");
    }
    println!();

    println!("🛍️  Shopping credit (part of wallet, not added again):");
    println!("  Net:        {}", format::currency(&figures.credit.value));
    println!();

    println!("✅ Net paid: {}", format::currency(&figures.grand_total));

    Ok(())
}
