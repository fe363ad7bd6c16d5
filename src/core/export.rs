//! Share and document-export collaborators
//!
//! Neither service exists yet. The side panel talks to them through
//! [`ShareService`] and [`DocumentExporter`]; [`UnavailableExport`] answers
//! every request with [`ExportError::Unavailable`], whose message is what the
//! user gets to see.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::generator::GeneratedIdea;

/// Action a collaborator was asked to perform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportAction {
    Share,
    DownloadPdf,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("{}", unavailable_notice(.0))]
    Unavailable(ExportAction),
}

fn unavailable_notice(action: &ExportAction) -> &'static str {
    match action {
        ExportAction::Share => "Sharing functionality would be implemented here",
        ExportAction::DownloadPdf => "PDF download functionality would be implemented here",
    }
}

/// Payload handed to the collaborators
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdeaDocument {
    pub title: String,
    pub prompt: String,
    pub content: String,
    pub revenue_streams: u8,
    pub months_to_profitability: u8,
    pub created_at: DateTime<Utc>,
}

impl IdeaDocument {
    pub fn from_idea(idea: &GeneratedIdea, created_at: DateTime<Utc>) -> Self {
        Self {
            title: "Your Next Big Idea".to_string(),
            prompt: idea.prompt.clone(),
            content: idea.content.clone(),
            revenue_streams: idea.revenue_streams,
            months_to_profitability: idea.months_to_profitability,
            created_at,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Link returned by a share service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink(pub String);

/// Rendered document returned by an exporter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub trait ShareService {
    fn share(&self, document: Option<&IdeaDocument>) -> Result<ShareLink, ExportError>;
}

pub trait DocumentExporter {
    fn export_pdf(&self, document: Option<&IdeaDocument>) -> Result<ExportedFile, ExportError>;
}

/// Stand-in for both collaborators until real services exist
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableExport;

impl ShareService for UnavailableExport {
    fn share(&self, _document: Option<&IdeaDocument>) -> Result<ShareLink, ExportError> {
        Err(ExportError::Unavailable(ExportAction::Share))
    }
}

impl DocumentExporter for UnavailableExport {
    fn export_pdf(&self, _document: Option<&IdeaDocument>) -> Result<ExportedFile, ExportError> {
        Err(ExportError::Unavailable(ExportAction::DownloadPdf))
    }
}
