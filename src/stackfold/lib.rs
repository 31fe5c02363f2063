//! # Stackfold Architecture
//!
//! Stackfold composes the *addons* of a containerized service, user-authored fragments of
//! parameters, resources and outputs, into one infrastructure template ready for deployment.
//! It is a library with a thin CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! │  - Writes composed templates to stdout or --output files    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves options from config and per-call overrides      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - template, list, config                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Composition Engine (addons/)                               │
//! │  - classify → aggregate → validate → render                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Workspace Layer (workspace/)                               │
//! │  - WorkspaceReader trait                                    │
//! │  - FsWorkspace (production), InMemoryWorkspace (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process, and nothing
//! is persisted: the composed template is returned to the caller, who decides where it goes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`addons`]: Classification, merging, validation and rendering of addons
//! - [`workspace`]: Read access to addons directories
//! - [`model`]: Core data types (`Category`, `Slot`, `AggregatedAddons`)
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod addons;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod workspace;
