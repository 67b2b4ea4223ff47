//! TFDA class II/III medical device premarket application service.
//!
//! Holds one live application form per process, renders it as a Markdown
//! draft, exports it as JSON or CSV, loads example cases from a static
//! catalog, and forwards the record to a generative-language service for a
//! screen review.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod session;
