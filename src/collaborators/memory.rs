//! In-process lead store.
//!
//! Implements both collaborator traits without a backend: leads are kept in
//! a map and reports are rendered from a text template. Useful for demos
//! and as the reference behaviour for real backends.

use rustc_hash::FxHashMap;

use super::lead::{LeadError, LeadId, LeadReceipt, LeadRecord, LeadStatus, LeadSubmitter};
use super::report::{render_report, ReportError, ReportService, DEFAULT_TEMPLATE};
use crate::core::GameRng;

/// URL-safe alphabet for lead ids.
const LEAD_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
const LEAD_ID_LEN: usize = 10;

#[derive(Clone, Debug)]
struct StoredLead {
    record: LeadRecord,
    status: LeadStatus,
}

/// Lead storage and report rendering backed by a hash map.
#[derive(Clone, Debug)]
pub struct MemoryLeadStore {
    leads: FxHashMap<LeadId, StoredLead>,
    rng: GameRng,
    template: String,
}

impl MemoryLeadStore {
    /// Create an empty store. `rng` generates lead ids.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            leads: FxHashMap::default(),
            rng,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Replace the report template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Number of stored leads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Stored record for a lead.
    #[must_use]
    pub fn get(&self, lid: &LeadId) -> Option<&LeadRecord> {
        self.leads.get(lid).map(|s| &s.record)
    }

    #[must_use]
    pub fn status(&self, lid: &LeadId) -> Option<LeadStatus> {
        self.leads.get(lid).map(|s| s.status)
    }

    /// Move a lead through the workflow. Returns false for unknown ids.
    pub fn set_status(&mut self, lid: &LeadId, status: LeadStatus) -> bool {
        match self.leads.get_mut(lid) {
            Some(stored) => {
                stored.status = status;
                true
            }
            None => false,
        }
    }

    fn generate_id(&mut self) -> LeadId {
        loop {
            let id: String = (0..LEAD_ID_LEN)
                .map(|_| char::from(LEAD_ID_ALPHABET[self.rng.gen_range_usize(0..LEAD_ID_ALPHABET.len())]))
                .collect();
            let lid = LeadId(id);
            if !self.leads.contains_key(&lid) {
                return lid;
            }
        }
    }
}

impl LeadSubmitter for MemoryLeadStore {
    fn submit(&mut self, lead: &LeadRecord) -> Result<LeadReceipt, LeadError> {
        lead.validate()?;

        let lid = self.generate_id();
        self.leads.insert(
            lid.clone(),
            StoredLead {
                record: lead.clone(),
                status: LeadStatus::New,
            },
        );

        log::info!("stored lead {lid} with {} cards", lead.selected_cards.len());
        Ok(LeadReceipt { lid })
    }
}

impl ReportService for MemoryLeadStore {
    fn fetch(&self, lid: &LeadId) -> Result<String, ReportError> {
        let stored = self
            .leads
            .get(lid)
            .ok_or_else(|| ReportError::NotFound(lid.clone()))?;
        Ok(render_report(&self.template, &stored.record))
    }
}
