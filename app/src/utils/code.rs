use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of digits in a generated code.
pub const OTP_LENGTH: u32 = 5;

/// Zero-padded numeric code, e.g. "04217".
pub fn generate_code() -> String {
    let n = rand::rng().random_range(0..10u32.pow(OTP_LENGTH));
    format!("{:0width$}", n, width = OTP_LENGTH as usize)
}

/// Lowercase hex SHA-256 over the UTF-8 plaintext, matching the stored form.
pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
