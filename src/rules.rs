//! Induced rules and the rule tables handed back to callers
//!
//! A [`RuleTable`] has one row per rule. Its columns are the conditional
//! attributes used by at least one rule, in table column order, followed by
//! the decision attribute. Cells are sparse: an attribute a rule does not
//! constrain reads as `None`.

use crate::table::Value;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `attribute = value` constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Descriptor {
    pub attribute: String,
    pub value: Value,
}

impl Descriptor {
    pub fn new(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Descriptor {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.attribute, self.value)
    }
}

/// A conjunction of descriptors implying one decision value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    /// Descriptors in the order they were selected
    pub conditions: Vec<Descriptor>,

    /// Decision value implied by the conditions
    pub decision: Value,

    /// Number of objects of the decision class matched by the conditions
    pub support: usize,
}

impl Rule {
    /// Value this rule requires for `attribute`, if constrained
    pub fn condition(&self, attribute: &str) -> Option<&Value> {
        self.conditions
            .iter()
            .find(|d| d.attribute == attribute)
            .map(|d| &d.value)
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            write!(f, "true")?;
        } else {
            let parts: Vec<String> = self.conditions.iter().map(|d| d.to_string()).collect();
            write!(f, "{}", parts.join(" AND "))?;
        }
        write!(f, " => {}", self.decision)
    }
}

/// Rules generated for one input table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Rule Table", description = "Decision rules induced from one table")]
pub struct RuleTable {
    /// Label of the input table
    pub label: String,

    /// Name of the decision attribute
    pub decision_attribute: String,

    /// Used conditional attributes in table order, then the decision attribute
    pub columns: Vec<String>,

    /// One entry per rule, grouped by decision class
    pub rules: Vec<Rule>,

    /// Decision values whose class could not be covered by consistent rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unseparable: Vec<Value>,

    /// Fingerprint of the input table the rules were induced from
    pub fingerprint: String,
}

impl RuleTable {
    /// Number of rules (rows)
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sparse cell access: `None` means the rule does not constrain `column`
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let rule = self.rules.get(row)?;
        if column == self.decision_attribute {
            Some(&rule.decision)
        } else {
            rule.condition(column)
        }
    }

    /// Rules concluding a given decision value
    pub fn rules_for<'a>(&'a self, decision: &'a Value) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |r| &r.decision == decision)
    }

    /// Render as a human-readable table
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Rules for '{}' ({} rule{}, decision: {})\n",
            self.label,
            self.rules.len(),
            if self.rules.len() == 1 { "" } else { "s" },
            self.decision_attribute
        ));

        let mut grid: Vec<Vec<String>> = vec![self.columns.clone()];
        for row in 0..self.rules.len() {
            grid.push(
                self.columns
                    .iter()
                    .map(|c| {
                        self.cell(row, c)
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "-".to_string())
                    })
                    .collect(),
            );
        }
        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| grid.iter().map(|r| r[i].chars().count()).max().unwrap_or(0))
            .collect();
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
                .collect();
            out.push_str(&format!("  {}\n", cells.join(" | ").trim_end()));
            if i == 0 {
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                out.push_str(&format!("  {}\n", rule.join("-+-")));
            }
        }

        if !self.unseparable.is_empty() {
            let values: Vec<String> = self.unseparable.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!("  ✗ No consistent rules for: {}\n", values.join(", ")));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> RuleTable {
        RuleTable {
            label: "play".into(),
            decision_attribute: "play".into(),
            columns: vec!["outlook".into(), "windy".into(), "play".into()],
            rules: vec![
                Rule {
                    conditions: vec![Descriptor::new("outlook", "overcast")],
                    decision: Value::from("yes"),
                    support: 4,
                },
                Rule {
                    conditions: vec![
                        Descriptor::new("outlook", "rainy"),
                        Descriptor::new("windy", true),
                    ],
                    decision: Value::from("no"),
                    support: 2,
                },
            ],
            unseparable: vec![],
            fingerprint: String::new(),
        }
    }

    #[test]
    fn test_sparse_cells() {
        let t = table();
        assert_eq!(t.cell(0, "outlook"), Some(&Value::from("overcast")));
        assert_eq!(t.cell(0, "windy"), None);
        assert_eq!(t.cell(0, "play"), Some(&Value::from("yes")));
        assert_eq!(t.cell(1, "windy"), Some(&Value::Bool(true)));
        assert_eq!(t.cell(2, "play"), None);
    }

    #[test]
    fn test_rule_display() {
        let t = table();
        assert_eq!(t.rules[1].to_string(), "outlook = rainy AND windy = true => no");
        assert_eq!(t.rules_for(&Value::from("no")).count(), 1);
    }

    #[test]
    fn test_report_layout() {
        let report = table().to_report();
        assert_eq!(
            report,
            "Rules for 'play' (2 rules, decision: play)\n\
             \x20 outlook  | windy | play\n\
             \x20 ---------+-------+-----\n\
             \x20 overcast | -     | yes\n\
             \x20 rainy    | true  | no\n"
        );
    }
}
