use rust_decimal::Decimal;

/// Money columns are NUMERIC(12, 2).
const MAX_SCALE: u32 = 2;
const MAX_INTEGER_DIGITS: u32 = 10;

/// Check that `amount` fits a money column exactly: at most two decimal
/// places and an absolute value below 10^10.
pub fn check_amount(field: &str, amount: Decimal) -> Result<(), String> {
    if amount.normalize().scale() > MAX_SCALE {
        return Err(format!("{field} must have at most {MAX_SCALE} decimal places"));
    }
    let limit = Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS));
    if amount.abs() >= limit {
        return Err(format!("{field} is out of range"));
    }
    Ok(())
}
