//! Display filters applied to an already-ranked shortlist. They only remove
//! entries; order is never changed.

use serde::{Deserialize, Serialize};

use crate::models::consultant::ConsultantRecord;

/// Years-of-experience bucket offered by the filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceRange {
    /// Also what an empty selection (`experience=`) means.
    #[default]
    #[serde(rename = "any", alias = "")]
    Any,
    #[serde(rename = "0-2")]
    UpToTwo,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "6+")]
    SixPlus,
}

impl ExperienceRange {
    pub const SELECTABLE: [ExperienceRange; 3] = [
        ExperienceRange::UpToTwo,
        ExperienceRange::ThreeToFive,
        ExperienceRange::SixPlus,
    ];

    pub fn contains(self, years: u32) -> bool {
        match self {
            ExperienceRange::Any => true,
            ExperienceRange::UpToTwo => years <= 2,
            ExperienceRange::ThreeToFive => (3..=5).contains(&years),
            ExperienceRange::SixPlus => years >= 6,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ExperienceRange::Any => "any",
            ExperienceRange::UpToTwo => "0-2",
            ExperienceRange::ThreeToFive => "3-5",
            ExperienceRange::SixPlus => "6+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceRange::Any => "Any",
            ExperienceRange::UpToTwo => "0–2 years",
            ExperienceRange::ThreeToFive => "3–5 years",
            ExperienceRange::SixPlus => "6+ years",
        }
    }
}

/// Filter selection. `None`, blank, and `"any"` all mean "no constraint".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortlistFilters {
    pub location: Option<String>,
    #[serde(default)]
    pub experience: ExperienceRange,
    pub keyword: Option<String>,
}

impl ShortlistFilters {
    pub fn is_empty(&self) -> bool {
        self.location_constraint().is_none()
            && self.experience == ExperienceRange::Any
            && self.keyword_constraint().is_none()
    }

    fn location_constraint(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty() && *loc != "any")
    }

    fn keyword_constraint(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(|kw| kw.trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
    }

    pub fn apply<'a>(&self, consultants: Vec<&'a ConsultantRecord>) -> Vec<&'a ConsultantRecord> {
        if self.is_empty() {
            return consultants;
        }

        let location = self.location_constraint();
        let keyword = self.keyword_constraint();

        consultants
            .into_iter()
            .filter(|c| location.map_or(true, |loc| c.location == loc))
            .filter(|c| self.experience.contains(c.years_of_exp))
            .filter(|c| keyword.as_deref().map_or(true, |kw| mentions_keyword(c, kw)))
            .collect()
    }
}

/// Name, role, or any skill contains `keyword` (already lowercased).
fn mentions_keyword(consultant: &ConsultantRecord, keyword: &str) -> bool {
    consultant.name.to_lowercase().contains(keyword)
        || consultant.role.to_lowercase().contains(keyword)
        || consultant
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(keyword))
}
