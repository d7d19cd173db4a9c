use std::fmt::Write;

use anyhow::Result;
use nomination_engine::{
    checkout_objects::{CheckoutOrder, VerifiedPayment},
    db_types::Nomination,
};
use prettytable::{
    format::{LinePosition, LineSeparator, TableFormat},
    row,
    Table,
};

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

pub fn format_nominations(nominations: &[Nomination]) -> String {
    if nominations.is_empty() {
        return "No nominations yet".to_string();
    }
    let mut table = Table::new();
    table.set_format(markdown_format());
    table.set_titles(row![
        "ID", "Submitted", "Name", "Organization", "Sector", "City", "State", "Phone", "Email", "PhD", "Forbes"
    ]);
    for n in nominations {
        table.add_row(row![
            n.id,
            n.created_at.format("%Y-%m-%d %H:%M"),
            n.full_name,
            n.organization_name,
            n.sector,
            n.city,
            n.state,
            n.phone_number,
            n.email,
            n.doctorate,
            n.forbes
        ]);
    }
    table.to_string()
}

pub fn format_nomination(n: &Nomination) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "Nomination #{} received {}", n.id, n.created_at.to_rfc3339())?;
    writeln!(f, "Nominee:       {}", n.full_name)?;
    writeln!(f, "Organization:  {}", n.organization_name)?;
    writeln!(f, "Sector:        {}", n.sector)?;
    writeln!(f, "Location:      {}, {}, {}", n.address, n.city, n.state)?;
    writeln!(f, "Contact:       {} / {}", n.phone_number, n.email)?;
    if let Some(gstin) = &n.gstin {
        writeln!(f, "GSTIN:         {gstin}")?;
    }
    if let Some(website) = &n.website {
        writeln!(f, "Website:       {website}")?;
    }
    writeln!(f, "Doctorate:     {}", n.doctorate)?;
    writeln!(f, "Forbes listed: {}", n.forbes)?;
    Ok(f)
}

pub fn format_order(order: &CheckoutOrder) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "Order id: {}", order.order_id)?;
    writeln!(f, "Amount:   {} {} (smallest currency unit)", order.amount.value(), order.currency)?;
    writeln!(f, "Key id:   {}", order.key_id)?;
    writeln!(f, "Receipt:  {}", order.receipt)?;
    Ok(f)
}

pub fn format_verified_payment(payment: &VerifiedPayment) -> String {
    if payment.verified {
        format!("✅️ Payment {} on order {} is verified", payment.payment_id, payment.order_id)
    } else {
        format!("❌️ Payment {} on order {} is NOT verified", payment.payment_id, payment.order_id)
    }
}
