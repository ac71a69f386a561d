//! The fixed set of card categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a name does not belong to the enumerated set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

/// Card category. Serialized as its display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Congenital & Genetic")]
    CongenitalGenetic,
    #[serde(rename = "Nutritional & Metabolic")]
    NutritionalMetabolic,
    #[serde(rename = "Infectious & Parasitic")]
    InfectiousParasitic,
    #[serde(rename = "Perceptual & Recognition")]
    PerceptualRecognition,
    #[serde(rename = "Psychological & Behavioral")]
    PsychologicalBehavioral,
    #[serde(rename = "Degenerative & Resource")]
    DegenerativeResource,
    #[serde(rename = "Governance & Autoimmune")]
    GovernanceAutoimmune,
    #[serde(rename = "Operational & Control")]
    OperationalControl,
    #[serde(rename = "Human-System Interface")]
    HumanSystemInterface,
}

impl Category {
    /// Every category, in filter-menu order.
    pub const ALL: [Category; 9] = [
        Category::CongenitalGenetic,
        Category::NutritionalMetabolic,
        Category::InfectiousParasitic,
        Category::PerceptualRecognition,
        Category::PsychologicalBehavioral,
        Category::DegenerativeResource,
        Category::GovernanceAutoimmune,
        Category::OperationalControl,
        Category::HumanSystemInterface,
    ];

    /// Display name, as used in taxonomy documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::CongenitalGenetic => "Congenital & Genetic",
            Category::NutritionalMetabolic => "Nutritional & Metabolic",
            Category::InfectiousParasitic => "Infectious & Parasitic",
            Category::PerceptualRecognition => "Perceptual & Recognition",
            Category::PsychologicalBehavioral => "Psychological & Behavioral",
            Category::DegenerativeResource => "Degenerative & Resource",
            Category::GovernanceAutoimmune => "Governance & Autoimmune",
            Category::OperationalControl => "Operational & Control",
            Category::HumanSystemInterface => "Human-System Interface",
        }
    }

    /// Accent colour (hex) for cards and the filter menu.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Category::CongenitalGenetic => "#8B0000",
            Category::NutritionalMetabolic => "#D2691E",
            Category::InfectiousParasitic => "#228B22",
            Category::PerceptualRecognition => "#6A0DAD",
            Category::PsychologicalBehavioral => "#4169E1",
            Category::DegenerativeResource => "#8B4513",
            Category::GovernanceAutoimmune => "#DAA520",
            Category::OperationalControl => "#708090",
            Category::HumanSystemInterface => "#008B8B",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
