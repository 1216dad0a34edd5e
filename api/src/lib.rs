mod error;
mod extractor;
mod init;
mod middleware;
mod openapi;

pub mod routers;

pub use init::{setup_config, setup_db, setup_router};
