//! External collaborators: lead submission and report retrieval.
//!
//! The table state machine does not depend on these. They only consume what
//! it exposes (`Game::lead_cards`) to assemble a submission.
//!
//! ## Key Types
//!
//! - `LeadRecord`: Contact fields, kept cards and survey answers
//! - `LeadSubmitter`: Accepts a lead, returns a `LeadReceipt`
//! - `ReportService`: Fetches rendered report text by `LeadId`
//! - `MemoryLeadStore`: In-process implementation of both

pub mod lead;
pub mod memory;
pub mod report;

pub use lead::{LeadCard, LeadError, LeadId, LeadReceipt, LeadRecord, LeadStatus, LeadSubmitter};
pub use memory::MemoryLeadStore;
pub use report::{render_report, ReportError, ReportService, DEFAULT_TEMPLATE};
