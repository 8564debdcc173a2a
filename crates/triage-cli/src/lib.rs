//! CLI library components for the triage tool.

pub mod logging;
