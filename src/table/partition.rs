//! Decision class partitioning
//!
//! Classes appear in first-seen order of their decision value, and objects
//! within a class keep input row order, so downstream coverage counts are
//! reproducible.

use super::value::Value;
use super::DecisionTable;

/// Objects sharing one decision value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionClass {
    decision: u32,
    value: Value,
    objects: Vec<usize>,
}

impl DecisionClass {
    /// Decision code of this class
    pub fn decision(&self) -> u32 {
        self.decision
    }

    /// Decision value of this class
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Object indices in row order
    pub fn objects(&self) -> &[usize] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// All decision classes of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    classes: Vec<DecisionClass>,
}

impl Partition {
    /// Classes in first-seen decision order
    pub fn classes(&self) -> &[DecisionClass] {
        &self.classes
    }

    /// Class for a decision value
    pub fn get(&self, value: &Value) -> Option<&DecisionClass> {
        self.classes.iter().find(|c| &c.value == value)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Group the objects of a table by decision value
///
/// Every object lands in exactly one class. Decision codes are dense and
/// assigned in first-seen order, so the code doubles as the class position.
pub fn partition(table: &DecisionTable) -> Partition {
    let mut classes: Vec<DecisionClass> = table
        .decision()
        .domain()
        .iter()
        .enumerate()
        .map(|(code, value)| DecisionClass {
            decision: code as u32,
            value: value.clone(),
            objects: Vec::new(),
        })
        .collect();

    for (index, object) in table.objects().iter().enumerate() {
        classes[object.decision() as usize].objects.push(index);
    }

    Partition { classes }
}
