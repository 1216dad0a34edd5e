pub mod db;
pub mod testing;

pub use db::migrate;
