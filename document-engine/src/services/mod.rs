//! Engine services: storage contract and implementations, pure
//! calculators, lifecycle rules, quota guard, and the document
//! aggregate that composes them.

pub mod cache;
pub mod database;
pub mod engine;
pub mod fx;
pub mod lifecycle;
pub mod memory;
pub mod numbering;
pub mod quota;
pub mod store;
pub mod totals;

pub use engine::{CreatedDocument, DocumentEngine, RequestContext};
pub use quota::{QuotaDecision, QuotaGuard};
pub use store::Store;
