//! Request middleware

pub mod session_guard;
