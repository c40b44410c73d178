//! Table kinds and the label → table map consumed by induction

use super::source::{RawTable, TableSource};
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What a table holds, which selects how it is turned into decision tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    /// Attributes only; every attribute in turn acts as the decision
    InformationSystem,
    /// Conditional attributes plus one designated decision column
    DecisionTable,
    /// Attributes only; rules are mined for every attribute in turn
    AssociationRules,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::InformationSystem => "information-system",
            TableKind::DecisionTable => "decision-table",
            TableKind::AssociationRules => "association-rules",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "information-system" => Ok(TableKind::InformationSystem),
            "decision-table" => Ok(TableKind::DecisionTable),
            "association-rules" => Ok(TableKind::AssociationRules),
            other => Err(Error::Config(format!("Unknown table kind: '{}'", other))),
        }
    }
}

/// Build the label → table map for one induction run
///
/// Decision tables are labeled by their decision column. Information systems
/// and association-rule inputs expand into one table per column, each column
/// taking the decision role.
pub fn table_map(sources: Vec<RawTable>, kind: TableKind) -> Result<BTreeMap<String, RawTable>> {
    let mut map = BTreeMap::new();

    let mut insert = |table: RawTable| -> Result<()> {
        let label = table.decision_column().to_string();
        if map.contains_key(&label) {
            return Err(Error::DuplicateLabel(label));
        }
        map.insert(label, table);
        Ok(())
    };

    match kind {
        TableKind::DecisionTable => {
            for source in sources {
                insert(source)?;
            }
        }
        TableKind::InformationSystem | TableKind::AssociationRules => {
            for source in sources {
                for column in source.column_names().to_vec() {
                    insert(source.clone().with_decision(column))?;
                }
            }
        }
    }

    Ok(map)
}
