//! Application pages module
//!
//! - Home page (landing, chat and side panel)
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
