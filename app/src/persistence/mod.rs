pub mod otps;
