//! Display formatting for numbers, prices, dates and keys.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Insert `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a non-negative amount with two decimals and grouped thousands.
fn grouped_decimal(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    format!("{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Network hashrate in exahashes per second.
#[must_use]
pub fn format_hashrate(hashes_per_second: Option<f64>) -> String {
    match hashes_per_second {
        Some(h) if h > 0.0 && h.is_finite() => format!("{:.2} EH/s", h / 1e18),
        _ => "N/A".to_owned(),
    }
}

/// USD price with a dollar sign, or `N/A`.
#[must_use]
pub fn format_usd(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 && p.is_finite() => format!("${}", grouped_decimal(p)),
        _ => "N/A".to_owned(),
    }
}

/// Marketplace price: `N/A` when unknown, `Free` at zero, otherwise the
/// amount in the listing's currency (USD when unspecified).
#[must_use]
pub fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    let Some(price) = price.filter(|p| p.is_finite()) else {
        return "N/A".to_owned();
    };
    if price.abs() < f64::EPSILON {
        return "Free".to_owned();
    }
    let code = currency.map(str::trim).filter(|c| !c.is_empty()).unwrap_or("USD").to_uppercase();
    match code.as_str() {
        "USD" => format!("${}", grouped_decimal(price)),
        "EUR" => format!("€{}", grouped_decimal(price)),
        "GBP" => format!("£{}", grouped_decimal(price)),
        "SAT" | "SATS" => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let sats = price.abs().round() as u64;
            format!("{} sats", group_thousands(sats))
        }
        other => format!("{} {other}", grouped_decimal(price)),
    }
}

/// Shorten a hex public key to `head…tail` characters.
#[must_use]
pub fn truncate_pubkey(pubkey: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = pubkey.chars().collect();
    if chars.len() <= head + tail {
        return pubkey.to_owned();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}

/// Relative age of a unix timestamp, e.g. `3 hours ago`.
#[must_use]
pub fn time_ago(timestamp: u64, now: u64) -> String {
    const UNITS: [(u64, &str); 5] =
        [(31_536_000, "year"), (2_592_000, "month"), (86_400, "day"), (3_600, "hour"), (60, "minute")];

    let seconds = now.saturating_sub(timestamp);
    let (count, unit) = UNITS
        .iter()
        .find(|(span, _)| seconds > *span)
        .map_or((seconds, "second"), |(span, unit)| (seconds / span, *unit));
    if count == 1 { format!("1 {unit} ago") } else { format!("{count} {unit}s ago") }
}

/// Calendar cell intensity, 0 through 4.
#[must_use]
pub fn contribution_level(count: u64) -> u8 {
    u8::try_from(count.min(4)).unwrap_or(4)
}

/// `YYYY-MM-DD` (optionally followed by a time) as `Mon D, YYYY`.
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    parse_ymd(date).unwrap_or_else(|| iso.to_owned())
}

fn parse_ymd(date: &str) -> Option<String> {
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let name = MONTHS.get(month.checked_sub(1)?)?;
    Some(format!("{name} {day}, {year}"))
}

/// Current unix time in seconds.
#[must_use]
pub fn now_unix_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0) as u64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
