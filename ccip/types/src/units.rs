use alloy::primitives::U256;

/// Adds `percent` percent of `amount` on top of it, rounding the added part
/// down. Saturates at `U256::MAX`.
pub fn with_buffer(amount: U256, percent: u64) -> U256 {
    let hundred = U256::from(100);
    let percent = U256::from(percent);

    // Divide first so large amounts don't overflow before the division.
    let buffer = (amount / hundred)
        .saturating_mul(percent)
        .saturating_add((amount % hundred) * percent / hundred);

    amount.saturating_add(buffer)
}

/// Renders an amount in a token's smallest unit as a decimal string, e.g.
/// `1_500_000` with 6 decimals becomes `"1.5"`.
///
/// For display only; amounts are never converted back from this form.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return digits;
    }

    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

// ----------------------------------- tests -----------------------------------
