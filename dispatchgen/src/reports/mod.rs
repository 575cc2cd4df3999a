//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod explain;
mod generate;
mod output;

pub use check::{CheckReport, CheckSummary};
pub use explain::{EntryPoint, ExplainReport, LintInfo, PhaseInfo};
pub use generate::{GenerateOutcome, GenerateReport};
pub use output::{Report, TerminalOutput};
