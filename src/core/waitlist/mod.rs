//! Waitlist signup: request model, form controller and the HTTP client for
//! the external Waitlist Service.

mod client;
mod error;
mod form;
mod response;
mod types;

pub use client::{WaitlistClient, WaitlistService};
pub use error::WaitlistError;
pub use form::SignupForm;
pub use response::interpret_response;
pub use types::*;
