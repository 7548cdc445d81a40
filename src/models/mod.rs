pub mod account;
pub mod area;
pub mod status;
pub mod views;
