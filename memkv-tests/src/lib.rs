//! Helpers shared by the cross-thread scenario tests in `tests/`.

use memkv_core::{DBIterator, Entries};

/// Writer-side key of the `i`-th account.
pub fn account_key(i: u32) -> Vec<u8> {
    format!("account/{i:04}").into_bytes()
}

pub fn encode_balance(balance: u64) -> Vec<u8> {
    balance.to_be_bytes().to_vec()
}

/// `None` for missing or malformed values.
pub fn decode_balance(raw: Option<Vec<u8>>) -> Option<u64> {
    let raw: [u8; 8] = raw?.try_into().ok()?;
    Some(u64::from_be_bytes(raw))
}

/// Collect `(key, value)` pairs, skipping keys whose value vanished after the
/// snapshot was taken.
pub fn live_pairs(iter: Box<dyn DBIterator>) -> Vec<(Vec<u8>, Vec<u8>)> {
    Entries::new(iter)
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}
