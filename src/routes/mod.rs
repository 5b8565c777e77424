//! HTTP routes

pub mod customers;
pub mod dashboard;
pub mod health;
pub mod reference;
pub mod session;
pub mod tickets;
