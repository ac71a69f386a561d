//! Lead records: the structured request a player submits after a game.
//!
//! The record carries contact fields, the `{id, name}` pairs of the cards
//! the player kept, and optional survey answers. Submission goes through a
//! `LeadSubmitter`; the table itself never depends on it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardDefinition;

/// Survey scale bounds for `concern_level`.
pub const CONCERN_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

/// Errors raised while building or submitting a lead.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("concern level {0} is outside 1..=5")]
    ConcernLevel(u8),
    #[error("lead submission unavailable: {0}")]
    Unavailable(String),
    #[error("lead rejected: {0}")]
    Rejected(String),
}

/// Card reference inside a lead record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCard {
    /// Display id, e.g. `card-07`.
    pub id: String,
    pub name: String,
}

impl From<&CardDefinition> for LeadCard {
    fn from(card: &CardDefinition) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.clone(),
        }
    }
}

/// Workflow status of a stored lead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Archived,
}

/// Opaque lead identifier handed back on submission and used to fetch the
/// report.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub lid: LeadId,
}

/// A lead ready for submission.
///
/// Optional fields are omitted from the serialized form when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub title: String,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_cards: Vec<LeadCard>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_characteristics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_characteristics_other: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_providers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_providers_other: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub who_concerned: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_concerned_other: Option<String>,
}

impl LeadRecord {
    /// Start a lead with the four required contact fields.
    ///
    /// ```
    /// use pathology_cards::collaborators::LeadRecord;
    ///
    /// let lead = LeadRecord::builder("Ada", "ada@example.com", "CTO", "Engines Ltd")
    ///     .with_concern_level(4)
    ///     .with_comments("  ");
    ///
    /// assert!(lead.validate().is_ok());
    /// assert_eq!(lead.comments, None);
    /// ```
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        email: impl Into<String>,
        title: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            title: title.into(),
            organization: organization.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cards(mut self, cards: Vec<LeadCard>) -> Self {
        self.selected_cards = cards;
        self
    }

    /// Blank comments are dropped.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = non_blank(comments.into());
        self
    }

    #[must_use]
    pub fn with_concern_level(mut self, level: u8) -> Self {
        self.concern_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_ai_characteristics(mut self, values: Vec<String>, other: impl Into<String>) -> Self {
        self.ai_characteristics = values;
        self.ai_characteristics_other = non_blank(other.into());
        self
    }

    #[must_use]
    pub fn with_ai_providers(mut self, values: Vec<String>, other: impl Into<String>) -> Self {
        self.ai_providers = values;
        self.ai_providers_other = non_blank(other.into());
        self
    }

    #[must_use]
    pub fn with_who_concerned(mut self, values: Vec<String>, other: impl Into<String>) -> Self {
        self.who_concerned = values;
        self.who_concerned_other = non_blank(other.into());
        self
    }

    /// Check required fields and the concern scale.
    pub fn validate(&self) -> Result<(), LeadError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("title", &self.title),
            ("organization", &self.organization),
        ] {
            if value.trim().is_empty() {
                return Err(LeadError::MissingField(field));
            }
        }

        match self.concern_level {
            Some(level) if !CONCERN_LEVELS.contains(&level) => Err(LeadError::ConcernLevel(level)),
            _ => Ok(()),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Accepts lead records on behalf of a backend.
pub trait LeadSubmitter {
    /// Store a validated lead and return its identifier.
    fn submit(&mut self, lead: &LeadRecord) -> Result<LeadReceipt, LeadError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};

    fn lead() -> LeadRecord {
        LeadRecord::builder("Ada", "ada@example.com", "CTO", "Engines Ltd")
    }

    #[test]
    fn test_required_fields() {
        assert!(lead().validate().is_ok());

        let mut missing = lead();
        missing.title = "   ".into();
        assert!(matches!(missing.validate(), Err(LeadError::MissingField("title"))));
    }

    #[test]
    fn test_concern_level_bounds() {
        assert!(lead().with_concern_level(1).validate().is_ok());
        assert!(lead().with_concern_level(5).validate().is_ok());
        assert!(matches!(
            lead().with_concern_level(0).validate(),
            Err(LeadError::ConcernLevel(0))
        ));
        assert!(matches!(
            lead().with_concern_level(6).validate(),
            Err(LeadError::ConcernLevel(6))
        ));
    }

    #[test]
    fn test_lead_card_from_definition() {
        let card = CardDefinition::new(CardId::new(3), "Sycophancy", "", Category::PsychologicalBehavioral);
        let lead_card = LeadCard::from(&card);

        assert_eq!(lead_card.id, "card-03");
        assert_eq!(lead_card.name, "Sycophancy");
    }

    #[test]
    fn test_serialized_form_omits_empty_optionals() {
        let record = lead()
            .with_cards(vec![LeadCard {
                id: "card-01".into(),
                name: "Inherited Bias".into(),
            }])
            .with_ai_providers(vec!["open source".into()], "");

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["selected_cards"][0]["id"], "card-01");
        assert_eq!(json["ai_providers"][0], "open source");
        assert!(json.get("ai_providers_other").is_none());
        assert!(json.get("comments").is_none());
        assert!(json.get("who_concerned").is_none());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&LeadStatus::Qualified).unwrap(), "\"qualified\"");
        assert_eq!(LeadStatus::default(), LeadStatus::New);
    }
}
