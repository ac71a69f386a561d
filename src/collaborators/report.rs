//! Report retrieval.
//!
//! A report is rendered text keyed by the lead id handed out on
//! submission.

use thiserror::Error;

use super::lead::{LeadId, LeadRecord};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("lead {0} not found")]
    NotFound(LeadId),
    #[error("report service unavailable: {0}")]
    Unavailable(String),
}

/// Looks up and renders reports.
pub trait ReportService {
    fn fetch(&self, lid: &LeadId) -> Result<String, ReportError>;
}

/// Default plain-text report template.
///
/// Placeholders: `{name}`, `{organization}`, `{title}`, `{cards}` (one card
/// per line) and `{card_count}`.
pub const DEFAULT_TEMPLATE: &str = "\
AI pathology report for {name} ({title}, {organization})

Selected pathologies ({card_count}):
{cards}
";

/// Fill `template` from a stored lead.
///
/// The template is scanned once, left to right. Field values are copied in
/// literally, so a value that looks like a placeholder is never expanded.
/// Unknown `{...}` sequences are kept as written.
#[must_use]
pub fn render_report(template: &str, lead: &LeadRecord) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        let key = &tail[1..close];

        match placeholder(key, lead) {
            Some(value) => {
                out.push_str(&value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn placeholder(key: &str, lead: &LeadRecord) -> Option<String> {
    let value = match key {
        "name" => lead.name.clone(),
        "title" => lead.title.clone(),
        "organization" => lead.organization.clone(),
        "card_count" => lead.selected_cards.len().to_string(),
        "cards" if lead.selected_cards.is_empty() => "- none".to_string(),
        "cards" => lead
            .selected_cards
            .iter()
            .map(|c| format!("- {} ({})", c.name, c.id))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };
    Some(value)
}
