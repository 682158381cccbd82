/// Formats an amount in minor units as a price, e.g. `2550` and `"usd"` as `25.50 USD`.
pub fn format_price(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}{}.{:02} {}",
        sign,
        cents / 100,
        cents % 100,
        currency.to_uppercase()
    )
}
