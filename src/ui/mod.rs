pub mod background;
pub mod common;
pub mod pages;
pub mod waitlist_form;

pub use background::Background;
pub use pages::{LandingPage, NotFoundPage};
pub use waitlist_form::WaitlistForm;
