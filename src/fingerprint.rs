use rand::Rng;

const FINGERPRINT_PREFIX: &str = "anon-";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fresh pseudo-fingerprint: `anon-` plus a short random base-36 token.
/// This is deliberately NOT a device signature. It exists so the collector
/// can distinguish visitors within a session without cookies; a new one is
/// drawn on every beacon run.
#[must_use]
pub fn generate_fingerprint() -> String {
    let mut rng = rand::thread_rng();
    let token_length = rng.gen_range(4..=6);

    let mut fingerprint = String::with_capacity(FINGERPRINT_PREFIX.len() + token_length);
    fingerprint.push_str(FINGERPRINT_PREFIX);
    for _ in 0..token_length {
        fingerprint.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }

    fingerprint
}
