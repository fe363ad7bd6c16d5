//! Common reusable UI components
//!
//! Small primitives shared by the landing view, the chat view and the side
//! panel.

pub mod accordion;
pub mod button;
pub mod spinner;
pub mod tabs;

pub use accordion::AccordionSection;
pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use spinner::{Spinner, SpinnerSize, SpinnerStyle};
pub use tabs::{TabItem, TabPanel, Tabs};
