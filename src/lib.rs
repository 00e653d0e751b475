//! Client core for the loomkeeper textile bookkeeping app.
//!
//! Screens consume four small services:
//!
//! ```text
//! draft ──→ EntityFormValidator ──→ ModeController ──→ SubmissionGateway
//!                                                          │
//!              CollectionViewModel ←── confirmed mutation ─┘
//! ```
//!
//! [`workflow::EntityWorkflow`] wires them together for a single entity
//! screen.

pub mod api;
pub mod collection;
pub mod config;
pub mod entity;
pub mod gateway;
pub mod logging;
pub mod mode;
pub mod mvi;
pub mod session;
pub mod validation;
pub mod workflow;
