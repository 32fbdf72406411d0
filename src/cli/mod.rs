//! CLI command handlers for grannygrid.
//!
//! This module provides headless, scriptable access to the design pipeline
//! for automation, testing, and CI integration.

pub mod common;
pub mod design;
pub mod extract;
pub mod generate;
pub mod match_yarn;
pub mod stash;
pub mod template;
pub mod tropes;
pub mod usage;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use design::DesignArgs;
pub use extract::ExtractArgs;
pub use generate::GenerateArgs;
pub use match_yarn::MatchArgs;
pub use stash::StashArgs;
pub use template::TemplateArgs;
pub use tropes::TropesArgs;
pub use usage::UsageArgs;
