//! Line-item calculation: per-line and document-level subtotal, VAT,
//! and total in both currencies.

use engine_core::error::EngineError;
use rust_decimal::Decimal;

use crate::models::LineItemInput;
use crate::services::fx::{self, Direction};

/// Subtotal/VAT/total triple for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

impl DocumentTotals {
    pub fn zero() -> Self {
        DocumentTotals {
            subtotal: Decimal::ZERO,
            vat: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// One non-blank line with both currency value sets computed.
#[derive(Debug, Clone)]
pub struct ComputedLine {
    pub input: LineItemInput,
    pub sort_order: i32,
    /// Document-currency values.
    pub subtotal_fx: Decimal,
    pub vat_fx: Decimal,
    pub total_fx: Decimal,
    /// Base-currency values, converted per line.
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

/// Result of calculating a full document.
#[derive(Debug, Clone)]
pub struct CalculatedDocument {
    pub lines: Vec<ComputedLine>,
    /// Document-currency totals.
    pub totals_fx: DocumentTotals,
    /// Base-currency totals: the sum of the per-line converted values,
    /// so the persisted lines always add up to the persisted header.
    pub totals: DocumentTotals,
}

fn validate_line(input: &LineItemInput) -> Result<(), EngineError> {
    if input.description.trim().is_empty() {
        return Err(EngineError::validation("line description is required"));
    }
    if input.quantity < Decimal::ZERO {
        return Err(EngineError::validation("quantity must not be negative"));
    }
    if input.unit_price < Decimal::ZERO {
        return Err(EngineError::validation("unit price must not be negative"));
    }
    if input.vat_rate < Decimal::ZERO || input.vat_rate > Decimal::ONE_HUNDRED {
        return Err(EngineError::validation(
            "vat rate must be between 0 and 100 percent",
        ));
    }
    Ok(())
}

/// Calculate every non-blank line and the document sums.
///
/// `fx_rate` is the document-to-base factor; pass 1 for base-currency
/// documents, which makes the two total sets identical.
pub fn calculate(
    items: &[LineItemInput],
    fx_rate: Decimal,
) -> Result<CalculatedDocument, EngineError> {
    let mut lines = Vec::new();
    let mut totals_fx = DocumentTotals::zero();
    let mut totals = DocumentTotals::zero();
    let mut sort_order = 0i32;

    for item in items {
        if item.is_blank() {
            continue;
        }
        validate_line(item)?;

        let subtotal_fx = fx::round_amount(item.quantity * item.unit_price);
        let vat_fx = fx::round_amount(subtotal_fx * item.vat_rate / Decimal::ONE_HUNDRED);
        let total_fx = subtotal_fx + vat_fx;

        let subtotal = fx::convert(subtotal_fx, fx_rate, Direction::DocumentToBase)?;
        let vat = fx::convert(vat_fx, fx_rate, Direction::DocumentToBase)?;
        let total = fx::convert(total_fx, fx_rate, Direction::DocumentToBase)?;

        totals_fx.subtotal += subtotal_fx;
        totals_fx.vat += vat_fx;
        totals_fx.total += total_fx;
        totals.subtotal += subtotal;
        totals.vat += vat;
        totals.total += total;

        lines.push(ComputedLine {
            input: item.clone(),
            sort_order,
            subtotal_fx,
            vat_fx,
            total_fx,
            subtotal,
            vat,
            total,
        });
        sort_order += 1;
    }

    Ok(CalculatedDocument {
        lines,
        totals_fx,
        totals,
    })
}

/// Document-currency totals only, for callers previewing a form.
pub fn calculate_totals(items: &[LineItemInput]) -> Result<DocumentTotals, EngineError> {
    calculate(items, Decimal::ONE).map(|calc| calc.totals_fx)
}
