use axum::http::StatusCode;

#[derive(Debug)]
pub struct CustomError {
    pub code: StatusCode,
    pub message: String,
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl std::error::Error for CustomError {}

impl CustomError {
    pub fn new(code: StatusCode, message: String) -> Self {
        Self { code, message }
    }

    /// Covers both "no record" and "hash mismatch"; the two are not
    /// distinguished so callers cannot probe which emails have codes
    /// outstanding.
    pub fn invalid_otp() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid OTP".to_string())
    }

    pub fn expired_otp() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "OTP has expired".to_string())
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message.to_string())
    }

    pub fn forbidden(message: &str) -> Self {
        Self::new(StatusCode::FORBIDDEN, message.to_string())
    }
}
