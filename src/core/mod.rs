//! Core domain models and state transitions for the idea chat

#[cfg(feature = "ssr")]
pub mod config;
pub mod export;
pub mod generator;
pub mod headline;
pub mod input;
pub mod insights;
pub mod message;
pub mod panel;
pub mod scroll;
pub mod session;
#[cfg(test)]
mod tests;

pub use export::{
    DocumentExporter, ExportAction, ExportError, IdeaDocument, ShareService, UnavailableExport,
};
pub use generator::{GeneratedIdea, GenerationSettings, IdeaGenerator, TemplateIdeaGenerator};
pub use headline::{Typewriter, TypewriterFrame};
pub use message::{ChatMessage, MessageKind};
pub use panel::{AnalysisSection, Feedback, PanelTab, PanelViewState};
pub use scroll::ScrollMetrics;
pub use session::{ChatSession, GenerationId, PendingGeneration, SessionError};
