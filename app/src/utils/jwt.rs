use chrono::Utc;
use jsonwebtoken::{Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::config::Config;

// Lab session tokens are deliberately short-lived; the client re-verifies
// with a fresh code once the token lapses.
const SESSION_DURATION: Duration = Duration::from_secs(60 * 15); // 15 minutes

// Generic Claims struct
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims<T> {
    pub exp: i64,
    pub data: T,
}

pub fn encode_data<T: Serialize>(config: &Config, data: T) -> Result<String, anyhow::Error> {
    let exp = (Utc::now() + SESSION_DURATION).timestamp();

    let claims = Claims { exp, data };
    encode(&Header::default(), &claims, &config.encoding_key)
        .map_err(|e| anyhow::anyhow!("Failed to encode session token: {}", e))
}

pub fn decode_data<T: DeserializeOwned>(config: &Config, token: &str) -> Result<T, anyhow::Error> {
    let token_data = decode::<Claims<T>>(token, &config.decoding_key, &Validation::default())
        .map_err(|e| anyhow::anyhow!("Failed to decode session token: {}", e))?;
    Ok(token_data.claims.data)
}
