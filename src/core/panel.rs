//! Side panel view state
//!
//! Purely local UI selection: which tab is showing, what feedback was given,
//! which analysis sections are expanded. None of it flows back into the
//! chat session.

use derive_more::Display;

/// Side panel tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum PanelTab {
    #[default]
    #[display("Overview")]
    Overview,
    #[display("Analysis")]
    Analysis,
    #[display("Next Steps")]
    Action,
}

impl PanelTab {
    pub const ALL: [PanelTab; 3] = [PanelTab::Overview, PanelTab::Analysis, PanelTab::Action];

    /// Identifier used for DOM ids and aria attributes
    pub fn id(&self) -> &'static str {
        match self {
            PanelTab::Overview => "overview",
            PanelTab::Analysis => "analysis",
            PanelTab::Action => "action",
        }
    }
}

/// "Was this idea helpful?" answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Like,
    Dislike,
}

/// Collapsible sections of the Analysis tab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnalysisSection {
    Market,
    Revenue,
    Technical,
}

impl AnalysisSection {
    pub const ALL: [AnalysisSection; 3] = [
        AnalysisSection::Market,
        AnalysisSection::Revenue,
        AnalysisSection::Technical,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AnalysisSection::Market => "Market Analysis",
            AnalysisSection::Revenue => "Revenue Potential",
            AnalysisSection::Technical => "Technical Feasibility",
        }
    }

    pub fn open_by_default(&self) -> bool {
        !matches!(self, AnalysisSection::Technical)
    }

    fn index(&self) -> usize {
        match self {
            AnalysisSection::Market => 0,
            AnalysisSection::Revenue => 1,
            AnalysisSection::Technical => 2,
        }
    }
}

/// Local state of one mounted side panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelViewState {
    active_tab: PanelTab,
    feedback: Option<Feedback>,
    expanded: [bool; 3],
}

impl Default for PanelViewState {
    fn default() -> Self {
        Self {
            active_tab: PanelTab::default(),
            feedback: None,
            expanded: AnalysisSection::ALL.map(|section| section.open_by_default()),
        }
    }
}

impl PanelViewState {
    pub fn active_tab(&self) -> PanelTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.active_tab = tab;
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Record an answer; a later answer replaces the earlier one
    pub fn give_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }

    pub fn is_expanded(&self, section: AnalysisSection) -> bool {
        self.expanded[section.index()]
    }

    /// Flip a section and return whether it is now expanded
    pub fn toggle_section(&mut self, section: AnalysisSection) -> bool {
        let slot = &mut self.expanded[section.index()];
        *slot = !*slot;
        *slot
    }
}
