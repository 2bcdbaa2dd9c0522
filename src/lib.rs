//! verlimit - Node.js and npm version constraint analyzer library
//!
//! This library provides the core functionality for inferring the runtime
//! versions a Node.js project supports:
//! - Version comparison, normalization and range bounds
//! - Constraint collection from package.json and package-lock.json
//! - Reconciliation into a lowest/highest Node.js and npm summary
//! - Writing the summary back as `engines` and `packageManager`

pub mod cli;
pub mod collector;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod prompt;
pub mod reconcile;
pub mod tables;
