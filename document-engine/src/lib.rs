//! document-engine: the financial document core of the accounting
//! application.
//!
//! Turns a set of line items into a consistent monetary document
//! (quotation, invoice, or purchase), converts between a document
//! currency and the company's base currency, assigns sequential
//! human-readable numbers, enforces lifecycle transitions, and gates
//! invoice creation against subscription quotas.
//!
//! Storage, the subscription record, and party lookups are external
//! collaborators reached through the [`services::store::Store`] trait;
//! [`services::database::PgStore`] is the PostgreSQL implementation and
//! [`services::memory::MemoryStore`] backs the tests.

pub mod models;
pub mod services;

pub use engine_core::error::{EngineError, StorageError};
