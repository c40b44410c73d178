//! Degenerate tables and unseparable classes
//!
//! Both checks run before the greedy loop. A table with no objects or a
//! single decision value has nothing to discriminate. A class containing an
//! object that agrees with some object of another class on every conditional
//! attribute cannot be covered by any consistent rule.

use crate::table::{DecisionClass, DecisionTable};
use std::collections::HashSet;

/// Whether rule generation is meaningless for this table
pub fn is_degenerate(table: &DecisionTable) -> bool {
    table.is_empty() || table.decision().domain().len() <= 1
}

/// Whether every object of `class` is discernible from every object outside it
/// using all conditional attributes together
pub fn is_separable(table: &DecisionTable, class: &DecisionClass) -> bool {
    let outside: HashSet<&[u32]> = table
        .objects()
        .iter()
        .filter(|o| o.decision() != class.decision())
        .map(|o| o.codes())
        .collect();

    class
        .objects()
        .iter()
        .all(|&i| !outside.contains(table.object(i).codes()))
}
