//! Fee management page

use chrono::Local;
use tracing::warn;

use crate::fees::FeeLedger;
use crate::handlers::commands::ack_text;
use crate::handlers::render::Table;
use crate::models::{Fee, FeePlan, FeeTier, Payment};
use crate::navigation::links::PATH_FEES;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::{format_rupees, parse_date};
use crate::utils::logging;

pub async fn handle_fee_list(services: &ServiceFactory) -> Result<String> {
    services.auth_middleware().require_page(PATH_FEES).await?;
    let fees = services.fee_service.fees().await?;

    if fees.is_empty() {
        return Ok("No fee records\n".to_string());
    }

    let mut table = Table::new(["Student", "Tier", "Total", "Paid", "Outstanding", "Status"]);
    for fee in &fees {
        // A plan that is not set up yet still gets a row
        let (paid, outstanding, status) = match FeeLedger::from_fee(fee) {
            Ok(ledger) => (
                format_rupees(ledger.paid()),
                format_rupees(ledger.outstanding()),
                status_text(fee, &ledger),
            ),
            Err(err) => {
                warn!(student_id = ?fee.student_id, error = %err, "Skipping ledger for invalid fee plan");
                ("-".to_string(), "-".to_string(), "invalid plan".to_string())
            }
        };
        table.row([
            fee.student_id.clone().unwrap_or_else(|| "-".to_string()),
            fee.plan.tier.to_string(),
            format_rupees(fee.plan.total),
            paid,
            outstanding,
            status,
        ]);
    }
    Ok(table.render())
}

pub async fn handle_fee_detail(services: &ServiceFactory, student_id: &str) -> Result<String> {
    services.auth_middleware().require_page(PATH_FEES).await?;
    let fee = services.fee_service.fee(student_id).await?;
    let ledger = FeeLedger::from_fee(&fee)?;

    let mut out = format!(
        "{} plan, {} in {} installment(s)\n",
        fee.plan.tier,
        format_rupees(fee.plan.total),
        fee.plan.installments
    );
    for (i, amount) in ledger.installments().iter().enumerate() {
        out.push_str(&format!("  #{}: {}\n", i + 1, format_rupees(*amount)));
    }

    if fee.payments.is_empty() {
        out.push_str("No payments yet\n");
    } else {
        let mut table = Table::new(["Date", "Amount", "Mode", "Reference"]);
        for payment in &fee.payments {
            table.row([
                payment.date.to_string(),
                format_rupees(payment.amount),
                payment.mode.clone().unwrap_or_else(|| "-".to_string()),
                payment.reference.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        out.push_str(&table.render());
    }

    out.push_str(&format!(
        "Paid {}, outstanding {} ({})\n",
        format_rupees(ledger.paid()),
        format_rupees(ledger.outstanding()),
        status_text(&fee, &ledger)
    ));
    Ok(out)
}

pub async fn handle_payment(
    services: &ServiceFactory,
    student_id: &str,
    amount: u64,
    date: Option<&str>,
    mode: Option<String>,
    reference: Option<String>,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_FEES).await?;
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let payment = Payment { amount, date, mode, reference };
    let ack = services.fee_service.add_payment(student_id, payment).await?;
    logging::log_user_action(&profile.user.id, "add_payment", Some(student_id));
    Ok(ack_text(&ack, &format!("Recorded {} for {}", format_rupees(amount), student_id)))
}

pub async fn handle_set_plan(
    services: &ServiceFactory,
    student_id: &str,
    tier: FeeTier,
    total: u64,
    installments: u8,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_FEES).await?;
    let plan = FeePlan::new(tier, total, installments)?;
    let ack = services.fee_service.set_plan(student_id, plan).await?;
    logging::log_user_action(&profile.user.id, "set_fee_plan", Some(student_id));
    Ok(ack_text(&ack, &format!("{} plan set for {}", tier, student_id)))
}

fn status_text(fee: &Fee, ledger: &FeeLedger) -> String {
    if fee.cleared || ledger.is_cleared() {
        return "cleared".to_string();
    }
    match ledger.next_installment() {
        Some((index, amount)) => format!("next #{} {}", index + 1, format_rupees(amount)),
        None => "cleared".to_string(),
    }
}
