//! Community Service Library
//!
//! Backend for a moderated community platform: forum discussions,
//! educational resources, and an abuse-reporting workflow. Every piece of
//! user-submitted text passes through a content-safety screening step
//! before it is persisted; borderline submissions are auto-flagged for
//! moderator review.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers
//! - `models`: Data structures for users, forum content, resources, reports
//! - `services`: Safety evaluation and auto-flagging logic
//! - `db`: Database access layer
//! - `middleware`: JWT authentication middleware
//! - `security`: Password hashing and token issuing
//! - `error`: Error types and handling
//! - `config`: Configuration management
//! - `metrics`: Observability and metrics collection

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod security;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
