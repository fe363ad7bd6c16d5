//! Canned analysis shown alongside a generated idea
//!
//! Every idea gets the same highlights, market notes and next steps.

/// A labelled percentage rendered as a progress bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub percent: u8,
}

impl Highlight {
    /// Percentage clamped to a drawable bar width
    pub fn bar_width(&self) -> u8 {
        self.percent.min(100)
    }
}

/// Title plus one line of detail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Numbered action item on the Next Steps tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Download,
    Link,
}

/// Downloadable or linked material
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub meta: &'static str,
    pub kind: ResourceKind,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        label: "Market Potential",
        percent: 85,
    },
    Highlight {
        label: "Implementation Difficulty",
        percent: 45,
    },
    Highlight {
        label: "Innovation Score",
        percent: 92,
    },
];

pub const MARKET_SUMMARY: &str = "The target market for this idea appears to be growing at a steady rate. Our analysis suggests potential for significant adoption in the following sectors:";

pub const MARKET_FACTS: [Fact; 4] = [
    Fact {
        title: "Primary Market",
        detail: "Small to medium enterprises looking to optimize operations",
    },
    Fact {
        title: "Market Size",
        detail: "$2.5B annual potential",
    },
    Fact {
        title: "Growth Rate",
        detail: "15% year over year",
    },
    Fact {
        title: "Competition",
        detail: "Moderate, fragmented market",
    },
];

pub const REVENUE_SUMMARY: &str = "Multiple revenue streams are possible with this business model:";

pub const REVENUE_MODELS: [Fact; 3] = [
    Fact {
        title: "Subscription Model",
        detail: "Recurring revenue from monthly/annual subscriptions",
    },
    Fact {
        title: "Premium Features",
        detail: "Tiered pricing for advanced functionality",
    },
    Fact {
        title: "Affiliate Partnerships",
        detail: "Revenue from strategic partnerships and integrations",
    },
];

pub const TECHNICAL_SUMMARY: &str =
    "From a technical standpoint, this idea is achievable with current technology.";

pub const TECH_STACK: [&str; 5] = ["React", "Node.js", "MongoDB", "AWS", "Machine Learning"];

pub const MVP_TIMELINE: &str = "Development timeline estimate: 4-6 months for MVP";

pub const NEXT_STEPS: [NextStep; 4] = [
    NextStep {
        number: 1,
        title: "Validate Your Idea",
        description: "Conduct customer interviews to validate your assumptions. Aim to speak with 10-15 potential users from your target market.",
    },
    NextStep {
        number: 2,
        title: "Build a Landing Page",
        description: "Create a simple landing page to gauge interest. Collect email addresses from potential customers to build an early audience.",
    },
    NextStep {
        number: 3,
        title: "Competitor Research",
        description: "Identify and analyze direct and indirect competitors. Look for gaps in their offerings that your solution can address.",
    },
    NextStep {
        number: 4,
        title: "Create an MVP",
        description: "Develop a minimal viable product focusing only on core features. Get it into users' hands as quickly as possible for feedback.",
    },
];

pub const RESOURCES: [Resource; 2] = [
    Resource {
        title: "Business Model Canvas Template",
        meta: "PDF • 2.4 MB",
        kind: ResourceKind::Download,
    },
    Resource {
        title: "Customer Interview Guide",
        meta: "Video • 12:45 min",
        kind: ResourceKind::Link,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_values() {
        let values: Vec<u8> = HIGHLIGHTS.iter().map(|h| h.percent).collect();
        assert_eq!(values, vec![85, 45, 92]);
    }

    #[test]
    fn test_bar_width_is_clamped() {
        let over = Highlight {
            label: "Over",
            percent: 140,
        };
        assert_eq!(over.bar_width(), 100);
        assert_eq!(HIGHLIGHTS[0].bar_width(), 85);
    }

    #[test]
    fn test_next_steps_are_numbered_in_order() {
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
        }
    }
}
