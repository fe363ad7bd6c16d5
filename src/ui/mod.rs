pub mod chat;
pub mod common;
pub mod icon;
pub mod landing;
pub mod pages;
pub mod session;
pub mod side_panel;

pub use chat::ChatView;
pub use icon::{Icon, icons};
pub use landing::LandingView;
pub use pages::{HomePage, NotFoundPage};
pub use session::{SessionContext, provide_session_context, use_session_context};
pub use side_panel::SidePanel;
