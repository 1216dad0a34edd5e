pub mod lab;
pub mod otp;
