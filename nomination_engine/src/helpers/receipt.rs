use rand::{distributions::Uniform, Rng};

pub const RECEIPT_PREFIX: &str = "receipt_";
const RECEIPT_SUFFIX_LEN: usize = 7;
const RECEIPT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a fresh receipt string for a payment order, e.g. `receipt_k3x9a0q`.
///
/// Receipts are only used to label orders on the gateway dashboard, so they need to be distinct rather than
/// unguessable.
pub fn new_receipt() -> String {
    let dist = Uniform::from(0..RECEIPT_ALPHABET.len());
    let suffix: String =
        rand::thread_rng().sample_iter(dist).take(RECEIPT_SUFFIX_LEN).map(|i| RECEIPT_ALPHABET[i] as char).collect();
    format!("{RECEIPT_PREFIX}{suffix}")
}
