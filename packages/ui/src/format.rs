//! Currency formatting for the report tables.

use api::{Decimal, RoundingStrategy};

/// Format `amount` as Brazilian reais: `R$ 1.234,56`, `-R$ 10,00`.
///
/// The space after the symbol is a non-breaking space so the amount never
/// wraps away from it inside a table cell.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$\u{a0}{grouped},{cents}")
}

/// CSS class for a balance cell: green when positive, red when negative.
pub fn saldo_class(saldo: Decimal) -> &'static str {
    if saldo.is_zero() {
        "saldo saldo-zero"
    } else if saldo.is_sign_negative() {
        "saldo saldo-negativo"
    } else {
        "saldo saldo-positivo"
    }
}
