pub mod aggregate;
pub mod area;
pub mod auth;
pub mod log;
pub mod query;
pub mod seed;
pub mod session;
pub mod status;
pub mod validate;
