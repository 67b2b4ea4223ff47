//! Service layer modules.
//!
//! Pure transforms of the application record (draft, exports, review prompt),
//! the case catalog, the activity log, and the generative-language client.

pub mod activity;
pub mod ai_client;
pub mod catalog;
pub mod draft;
pub mod export;
pub mod review;

pub use activity::ActivityLog;
pub use ai_client::AiClient;
pub use catalog::CaseCatalog;
