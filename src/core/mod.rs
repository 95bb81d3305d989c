//! Core logic of the landing page: configuration and the waitlist signup flow

pub mod config;
#[cfg(feature = "ssr")]
pub mod health;
pub mod waitlist;
