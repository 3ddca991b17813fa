const PRODUCT_BASE_URL: &str = "https://shopee.co.id";

/// Converts an integer micro-price into the display currency value.
/// Negative sentinels are the caller's problem; this divides unconditionally.
pub fn normalize_price(micro: i64) -> f64 {
    micro as f64 / 100_000.0
}

/// Canonical product page URL: `{base}/{cleaned-name}-i.{shopId}.{itemId}`.
///
/// The name is cleaned by dropping every character that is neither an ASCII
/// letter/digit nor a space, then turning each surviving space into a hyphen.
/// Hyphen runs are deliberately not collapsed or trimmed, and the filter is
/// ASCII-only, so non-ASCII letters vanish entirely (inherited upstream
/// behavior, kept for URL compatibility).
pub fn product_url(name: &str, shop_id: u64, item_id: u64) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();
    format!("{PRODUCT_BASE_URL}/{cleaned}-i.{shop_id}.{item_id}")
}
