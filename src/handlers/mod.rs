//! HTTP handlers for the community platform endpoints
//!
//! This module contains handlers for:
//! - Auth: registration, login, current-user lookup
//! - Forum: categories, threads, replies, moderator thread locking
//! - Resources: educational resource publishing and browsing
//! - Reports: abuse reports and the moderator triage workflow
//! - Uploads: presigned URLs for attachment uploads
//!
//! Content-submission handlers run the safety pipeline explicitly:
//! gate -> create -> auto-flag.

pub mod auth;
pub mod forum;
pub mod reports;
pub mod resources;
pub mod uploads;
