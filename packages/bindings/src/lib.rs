use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use realty_finance_core::commission::stepping::RateControl;
use realty_finance_core::sanitize::FieldRole;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_decimal(field: &str, raw: &str) -> NapiResult<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|e| to_napi_error(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Loan EMI
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_emi(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    let figures = realty_finance_core::emi::compute_emi(&input);
    serde_json::to_string(&figures).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    let schedule = realty_finance_core::emi::amortization_schedule(&input);
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Commission settlement
// ---------------------------------------------------------------------------

#[napi]
pub fn settle_commission(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::commission::CommissionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    let breakdown = realty_finance_core::commission::settle_commission(&input);
    serde_json::to_string(&breakdown).map_err(to_napi_error)
}

/// Step one of the settlement rates by its fixed increment, saturating at
/// the documented bound. `kind` is one of `commission`, `gst`, `tds`;
/// `direction` is `up` or `down`.
#[napi]
pub fn step_rate(kind: String, value: String, direction: String) -> NapiResult<String> {
    let current = parse_decimal("value", &value)?;
    let mut control = match kind.as_str() {
        "commission" => RateControl::commission_rate(current),
        "gst" => RateControl::gst_rate(current),
        "tds" => RateControl::tds_rate(current),
        other => {
            return Err(to_napi_error(format!(
                "Unknown rate kind '{other}'. Use: commission, gst, tds"
            )))
        }
    };
    let stepped = match direction.as_str() {
        "up" => control.increment(),
        "down" => control.decrement(),
        other => {
            return Err(to_napi_error(format!(
                "Unknown direction '{other}'. Use: up, down"
            )))
        }
    };
    Ok(stepped.to_string())
}

// ---------------------------------------------------------------------------
// Input sanitization and display rendering
// ---------------------------------------------------------------------------

/// Normalize a raw field edit. `role` is one of `currency`, `percent`,
/// `tenure_years`; rejected edits echo back `previous`.
#[napi]
pub fn sanitize_edit(role: String, raw: String, previous: String) -> NapiResult<String> {
    let role: FieldRole =
        serde_json::from_value(serde_json::Value::String(role)).map_err(to_napi_error)?;
    let previous = parse_decimal("previous", &previous)?;
    Ok(realty_finance_core::sanitize::sanitize_edit(role, &raw, previous).to_string())
}

#[napi]
pub fn format_inr(amount: String) -> NapiResult<String> {
    let amount = parse_decimal("amount", &amount)?;
    Ok(realty_finance_core::format::format_inr(amount))
}

#[napi]
pub fn amount_to_words(amount: String) -> NapiResult<String> {
    let amount = parse_decimal("amount", &amount)?;
    Ok(realty_finance_core::format::amount_to_words(amount))
}
