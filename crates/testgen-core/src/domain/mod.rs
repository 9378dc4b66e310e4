//! Domain models for TestGen.
//!
//! Canonical definitions for the core entities:
//! - `SubmittedFile`: a path/content pair handed in by the caller
//! - `TestPlanSummary`: a proposed test plan scoped to some of those paths
//! - `CodeArtifact`: generated test source for one summary

pub mod artifact;
pub mod error;
pub mod file;
pub mod summary;

pub use artifact::CodeArtifact;
pub use error::{Result, TestGenError};
pub use file::SubmittedFile;
pub use summary::{Complexity, SummaryKind, SummaryProfile, TestPlanSummary};
