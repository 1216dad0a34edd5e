pub mod code;
pub mod email;
pub mod jwt;
