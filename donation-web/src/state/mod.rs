//! Session state management

pub mod session;
