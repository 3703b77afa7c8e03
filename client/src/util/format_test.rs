use super::*;

// =============================================================
// Numbers
// =============================================================

#[test]
fn group_thousands_inserts_commas() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(901_234), "901,234");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn hashrate_is_shown_in_exahashes() {
    assert_eq!(format_hashrate(Some(6.5e20)), "650.00 EH/s");
    assert_eq!(format_hashrate(Some(1.234e18)), "1.23 EH/s");
}

#[test]
fn missing_hashrate_is_na() {
    assert_eq!(format_hashrate(None), "N/A");
    assert_eq!(format_hashrate(Some(0.0)), "N/A");
    assert_eq!(format_hashrate(Some(f64::NAN)), "N/A");
}

#[test]
fn usd_price_groups_and_rounds() {
    assert_eq!(format_usd(Some(97_123.456)), "$97,123.46");
    assert_eq!(format_usd(None), "N/A");
}

// =============================================================
// Marketplace prices
// =============================================================

#[test]
fn price_free_and_unknown() {
    assert_eq!(format_price(Some(0.0), Some("USD")), "Free");
    assert_eq!(format_price(None, Some("USD")), "N/A");
}

#[test]
fn price_uses_currency_symbol() {
    assert_eq!(format_price(Some(25.0), None), "$25.00");
    assert_eq!(format_price(Some(1_500.5), Some("eur")), "€1,500.50");
    assert_eq!(format_price(Some(9.99), Some("GBP")), "£9.99");
}

#[test]
fn price_in_sats_is_whole_number() {
    assert_eq!(format_price(Some(21_000.0), Some("sats")), "21,000 sats");
}

#[test]
fn price_with_unknown_currency_appends_code() {
    assert_eq!(format_price(Some(12.0), Some("CHF")), "12.00 CHF");
}

// =============================================================
// Keys and dates
// =============================================================

#[test]
fn pubkey_truncation_keeps_head_and_tail() {
    let pk = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";
    assert_eq!(truncate_pubkey(pk, 6, 4), "3bf0c6...459d");
    assert_eq!(truncate_pubkey(pk, 10, 4), "3bf0c63fcb...459d");
}

#[test]
fn short_pubkey_is_unchanged() {
    assert_eq!(truncate_pubkey("abcd", 6, 4), "abcd");
    assert_eq!(truncate_pubkey("", 6, 4), "");
}

#[test]
fn time_ago_picks_largest_unit() {
    let now = 1_700_000_000;
    assert_eq!(time_ago(now - 30, now), "30 seconds ago");
    assert_eq!(time_ago(now - 61, now), "1 minute ago");
    assert_eq!(time_ago(now - 3 * 3_600 - 5, now), "3 hours ago");
    assert_eq!(time_ago(now - 2 * 86_400 - 1, now), "2 days ago");
    assert_eq!(time_ago(now - 40 * 86_400, now), "1 month ago");
    assert_eq!(time_ago(now - 800 * 86_400, now), "2 years ago");
}

#[test]
fn time_ago_at_exact_boundary_uses_smaller_unit() {
    let now = 1_700_000_000;
    assert_eq!(time_ago(now - 60, now), "60 seconds ago");
    assert_eq!(time_ago(now - 3_600, now), "60 minutes ago");
}

#[test]
fn time_ago_future_timestamp_is_zero_seconds() {
    assert_eq!(time_ago(200, 100), "0 seconds ago");
}

#[test]
fn contribution_level_caps_at_four() {
    assert_eq!(contribution_level(0), 0);
    assert_eq!(contribution_level(3), 3);
    assert_eq!(contribution_level(4), 4);
    assert_eq!(contribution_level(57), 4);
}

#[test]
fn format_date_renders_month_name() {
    assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
    assert_eq!(format_date("2023-12-31T10:00:00Z"), "Dec 31, 2023");
}

#[test]
fn format_date_passes_through_garbage() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_date("2024-13-01"), "2024-13-01");
    assert_eq!(format_date(""), "");
}
