use super::*;

const PUBKEY: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

#[test]
fn seller_label_prefers_profile_name() {
    let profile = NostrProfile { display_name: Some("Satoshi's Shop".to_owned()), ..NostrProfile::default() };
    assert_eq!(seller_label(Some(&profile), PUBKEY), "Satoshi's Shop");
}

#[test]
fn seller_label_falls_back_to_short_pubkey() {
    assert_eq!(seller_label(None, PUBKEY), "3bf0c63fcb...459d");
    assert_eq!(seller_label(Some(&NostrProfile::default()), PUBKEY), "3bf0c63fcb...459d");
}
