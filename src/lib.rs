// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # greedy-rules - minimal decision rules from decision tables
//!
//! Induces, for every decision class of a decision table, a compact set of
//! `attribute = value` conjunctions that covers every object of the class
//! and matches no object outside it. Rules are grown greedily
//! ("Heuristic M"): each step adds the descriptor that keeps the most
//! uncovered class objects while cutting away objects of other classes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use greedy_rules::{calculate_decision_rules, table_map, read_csv};
//! use greedy_rules::{InductionConfig, ReaderOptions, TableKind};
//!
//! let raw = read_csv(Path::new("weather.csv"), &ReaderOptions::default())?;
//! let tables = table_map(vec![raw], TableKind::DecisionTable)?;
//!
//! let report = calculate_decision_rules(&tables, &InductionConfig::default());
//! for (label, outcome) in &report.outcomes {
//!     match outcome {
//!         Some(rules) => println!("{}", rules.to_report()),
//!         None => println!("{}: no rules", label),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  CSV ──► read_csv ──► RawTable ──► table_map(kind)          │
//! │                                        │                    │
//! │                          label → TableSource                │
//! │                                        │                    │
//! │  calculate_decision_rules ◄────────────┘                    │
//! │       │                                                     │
//! │       ├──► DecisionTable::from_source ──► integrity error   │
//! │       ├──► is_degenerate ──► no rules                       │
//! │       └──► partition ──► HeuristicM per class ──► RuleTable │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes
//!
//! | Situation | Report entry |
//! |-----------|--------------|
//! | Missing cell or decision column | `failures[label]` |
//! | Empty table or single decision value | `outcomes[label] = None` |
//! | No class can be covered consistently | `outcomes[label] = None` |
//! | Some classes covered | `outcomes[label] = Some(rules)`, rest in `unseparable` |

// Core modules
pub mod config;
pub mod error;
pub mod rules;
pub mod table;

// Operations
pub mod induce;
pub mod reader;

// Re-exports
pub use config::{InductionConfig, TieBreak};
pub use error::{Error, Result};
pub use induce::{calculate_decision_rules, induce_table, InductionReport};
pub use reader::{read_csv, read_csv_from, ReaderOptions};
pub use rules::{Descriptor, Rule, RuleTable};
pub use table::{
    partition, table_map, Attribute, DecisionClass, DecisionTable, Object, Partition, RawTable,
    TableKind, TableSource, Value,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
