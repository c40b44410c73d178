//! Rule induction over decision tables
//!
//! [`calculate_decision_rules`] is the entry point: it takes a label → table
//! map and returns an [`InductionReport`] holding, per label, either a rule
//! table, an explicit "no rules" outcome, or the data-integrity error that
//! kept the table from being processed.
//!
//! ```text
//! label → TableSource ──► DecisionTable ──► degenerate? ──► None
//!                               │
//!                               └──► partition ──► per class:
//!                                        separable? ──► HeuristicM ──► rules
//! ```
//!
//! ## Submodules
//!
//! - `objects` - bitsets over object indices
//! - `descriptor` - candidate descriptors in tie-break order
//! - `discern` - positive/negative hits and incremental safety
//! - `guard` - degenerate tables and unseparable classes
//! - `greedy` - the Heuristic M covering loop

pub mod descriptor;
pub mod discern;
pub mod greedy;
pub mod guard;
pub mod objects;

pub use descriptor::{Candidate, DescriptorIndex};
pub use discern::{Discernibility, RuleGrowth, Score};
pub use greedy::HeuristicM;
pub use guard::{is_degenerate, is_separable};
pub use objects::ObjectSet;

use crate::config::InductionConfig;
use crate::error::Error;
use crate::rules::{Rule, RuleTable};
use crate::table::{partition, DecisionClass, DecisionTable, TableSource};
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Outcome of one induction run
#[derive(Debug, Default, Serialize)]
pub struct InductionReport {
    /// Per label: generated rules, or `None` when no rules could be generated
    pub outcomes: BTreeMap<String, Option<RuleTable>>,

    /// Labels whose table could not be read as a decision table
    #[serde(serialize_with = "serialize_failures")]
    pub failures: BTreeMap<String, Error>,
}

fn serialize_failures<S: Serializer>(
    failures: &BTreeMap<String, Error>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(failures.iter().map(|(k, e)| (k, e.to_string())))
}

impl InductionReport {
    /// Outcome for a label; `Some(None)` is the explicit "no rules" marker
    pub fn get(&self, label: &str) -> Option<&Option<RuleTable>> {
        self.outcomes.get(label)
    }

    /// Rule table for a label, if rules were generated
    pub fn rules(&self, label: &str) -> Option<&RuleTable> {
        self.outcomes.get(label).and_then(Option::as_ref)
    }

    /// Error for a label, if its table was rejected
    pub fn failure(&self, label: &str) -> Option<&Error> {
        self.failures.get(label)
    }

    /// Number of labels accounted for
    pub fn len(&self) -> usize {
        self.outcomes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty() && self.failures.is_empty()
    }

    /// True when no table was rejected
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Render as human-readable text
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        let generated = self.outcomes.values().filter(|o| o.is_some()).count();
        out.push_str(&format!(
            "Induction: {} table(s), {} with rules, {} without, {} rejected\n",
            self.len(),
            generated,
            self.outcomes.len() - generated,
            self.failures.len()
        ));

        for (label, outcome) in &self.outcomes {
            out.push('\n');
            match outcome {
                Some(table) => out.push_str(&table.to_report()),
                None => out.push_str(&format!("Rules for '{}': none\n", label)),
            }
        }

        if !self.failures.is_empty() {
            out.push_str("\nRejected:\n");
            for (label, error) in &self.failures {
                out.push_str(&format!("  ✗ {}: {}\n", label, error));
            }
        }

        out
    }
}

/// Induce rules for every table of the map
///
/// Each label appears exactly once in the report, either among the outcomes
/// or among the failures. A failure in one table never affects another.
pub fn calculate_decision_rules<S>(
    tables: &BTreeMap<String, S>,
    config: &InductionConfig,
) -> InductionReport
where
    S: TableSource + Sync,
{
    let run = |(label, source): (&String, &S)| {
        let outcome = DecisionTable::from_source(source)
            .map(|table| induce_table(label, &table, config));
        (label.clone(), outcome)
    };

    let results: Vec<(String, Result<Option<RuleTable>, Error>)> = if config.parallel {
        tables.par_iter().map(run).collect()
    } else {
        tables.iter().map(run).collect()
    };

    let mut report = InductionReport::default();
    for (label, outcome) in results {
        match outcome {
            Ok(rules) => {
                report.outcomes.insert(label, rules);
            }
            Err(error) => {
                warn!(label = %label, error = %error, "table rejected");
                report.failures.insert(label, error);
            }
        }
    }
    report
}

/// Induce rules for a single decision table
///
/// Returns `None` for degenerate tables and for tables where no class could
/// be covered.
pub fn induce_table(
    label: &str,
    table: &DecisionTable,
    config: &InductionConfig,
) -> Option<RuleTable> {
    if is_degenerate(table) {
        info!(
            label,
            objects = table.len(),
            "degenerate decision table, no rules"
        );
        return None;
    }

    let index = DescriptorIndex::build(table, config.tie_break);
    let builder = HeuristicM::new(table, &index, config);
    let partition = partition(table);

    let induce = |class: &DecisionClass| -> Option<Vec<Rule>> {
        if !is_separable(table, class) {
            debug!(label, class = %class.value(), "class is inconsistent with the table");
            return None;
        }
        builder.induce_class(class)
    };

    let per_class: Vec<Option<Vec<Rule>>> = if config.parallel {
        partition.classes().par_iter().map(induce).collect()
    } else {
        partition.classes().iter().map(induce).collect()
    };

    let mut rules = Vec::new();
    let mut unseparable = Vec::new();
    for (class, outcome) in partition.classes().iter().zip(per_class) {
        match outcome {
            Some(class_rules) => rules.extend(class_rules),
            None => unseparable.push(class.value().clone()),
        }
    }

    if rules.is_empty() {
        info!(label, "no class could be covered, no rules");
        return None;
    }

    let mut columns: Vec<String> = table
        .conditions()
        .iter()
        .map(|a| a.name())
        .filter(|name| rules.iter().any(|r| r.condition(name).is_some()))
        .map(str::to_string)
        .collect();
    columns.push(table.decision().name().to_string());

    info!(
        label,
        rules = rules.len(),
        unseparable = unseparable.len(),
        "rules generated"
    );

    Some(RuleTable {
        label: label.to_string(),
        decision_attribute: table.decision().name().to_string(),
        columns,
        rules,
        unseparable,
        fingerprint: table.fingerprint().to_string(),
    })
}
