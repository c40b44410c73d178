//! Decision table data model
//!
//! A [`DecisionTable`] is an ordered collection of objects described by
//! conditional attributes plus exactly one decision attribute. Attribute
//! domains are derived from the data: each distinct value is assigned a code
//! in first-seen order, and objects store codes rather than values.
//!
//! ## Submodules
//!
//! - `source` - the [`TableSource`] boundary and the in-memory [`RawTable`]
//! - `partition` - grouping objects into decision classes
//! - `factory` - building the label → table map for an induction run

pub mod factory;
pub mod partition;
pub mod source;
pub mod value;

pub use factory::{table_map, TableKind};
pub use partition::{partition, DecisionClass, Partition};
pub use source::{RawTable, TableSource};
pub use value::Value;

use crate::error::{Error, Result};
use crate::rules::Descriptor;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

/// A named attribute and its observed domain
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    column: usize,
    domain: Vec<Value>,
}

impl Attribute {
    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column position in the source table
    pub fn column(&self) -> usize {
        self.column
    }

    /// Distinct values in first-seen order; a value's code is its position
    pub fn domain(&self) -> &[Value] {
        &self.domain
    }

    /// Value for a code
    pub fn value(&self, code: u32) -> &Value {
        &self.domain[code as usize]
    }
}

/// One row: conditional attribute codes plus the decision code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Object {
    row: usize,
    codes: Vec<u32>,
    decision: u32,
}

impl Object {
    /// Row index in the source table
    pub fn row(&self) -> usize {
        self.row
    }

    /// Code of conditional attribute `attribute`
    pub fn code(&self, attribute: usize) -> u32 {
        self.codes[attribute]
    }

    /// All conditional codes, in attribute order
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Decision code
    pub fn decision(&self) -> u32 {
        self.decision
    }
}

/// Objects × conditional attributes + one decision attribute
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTable {
    conditions: Vec<Attribute>,
    decision: Attribute,
    objects: Vec<Object>,
    fingerprint: String,
}

/// Collects the domain of one column while encoding it
struct DomainBuilder {
    attribute: Attribute,
    codes: HashMap<Value, u32>,
}

impl DomainBuilder {
    fn new(name: &str, column: usize) -> Self {
        Self {
            attribute: Attribute {
                name: name.to_string(),
                column,
                domain: Vec::new(),
            },
            codes: HashMap::new(),
        }
    }

    fn encode(&mut self, value: &Value) -> u32 {
        if let Some(code) = self.codes.get(value) {
            return *code;
        }
        let code = self.attribute.domain.len() as u32;
        self.attribute.domain.push(value.clone());
        self.codes.insert(value.clone(), code);
        code
    }
}

impl DecisionTable {
    /// Encode a source into a decision table
    ///
    /// Fails when a column name repeats, the decision column is absent or any
    /// cell is missing.
    pub fn from_source<S: TableSource + ?Sized>(source: &S) -> Result<Self> {
        let columns = source.column_names();
        // Descriptors are keyed by attribute name
        let mut seen = HashSet::new();
        if let Some(name) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(Error::DuplicateColumn(name.clone()));
        }
        let decision_name = source.decision_column();
        let decision_column = columns
            .iter()
            .position(|c| c == decision_name)
            .ok_or_else(|| Error::MissingDecisionColumn(decision_name.to_string()))?;

        let mut builders: Vec<DomainBuilder> = columns
            .iter()
            .enumerate()
            .map(|(i, name)| DomainBuilder::new(name, i))
            .collect();

        let mut hasher = Sha256::new();
        hasher.update(decision_name.as_bytes());
        for name in columns {
            hasher.update([0x1fu8]);
            hasher.update(name.as_bytes());
        }

        let mut objects = Vec::with_capacity(source.row_count());
        for row in 0..source.row_count() {
            hasher.update([0x1eu8]);
            let mut codes = Vec::with_capacity(columns.len().saturating_sub(1));
            let mut decision = 0;
            for (column, builder) in builders.iter_mut().enumerate() {
                let value = source
                    .cell(row, column)
                    .ok_or_else(|| Error::MissingValue {
                        row,
                        attribute: columns[column].clone(),
                    })?;
                hasher.update([0x1fu8]);
                hasher.update(value.to_string().as_bytes());
                let code = builder.encode(value);
                if column == decision_column {
                    decision = code;
                } else {
                    codes.push(code);
                }
            }
            objects.push(Object {
                row,
                codes,
                decision,
            });
        }

        let decision = builders.remove(decision_column).attribute;
        let conditions = builders.into_iter().map(|b| b.attribute).collect();

        Ok(DecisionTable {
            conditions,
            decision,
            objects,
            fingerprint: hex::encode(hasher.finalize()),
        })
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the table has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Conditional attributes in column order
    pub fn conditions(&self) -> &[Attribute] {
        &self.conditions
    }

    /// The decision attribute
    pub fn decision(&self) -> &Attribute {
        &self.decision
    }

    /// All objects in row order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Object at position `index`
    pub fn object(&self, index: usize) -> &Object {
        &self.objects[index]
    }

    /// Index of a conditional attribute by name
    pub fn condition_index(&self, name: &str) -> Option<usize> {
        self.conditions.iter().position(|a| a.name == name)
    }

    /// Value of conditional attribute `attribute` for object `index`
    pub fn value(&self, index: usize, attribute: usize) -> &Value {
        self.conditions[attribute].value(self.objects[index].code(attribute))
    }

    /// Decision value of object `index`
    pub fn decision_value(&self, index: usize) -> &Value {
        self.decision.value(self.objects[index].decision)
    }

    /// SHA-256 of the column names and cell contents, hex encoded
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether object `index` satisfies every descriptor of a conjunction
    ///
    /// A descriptor naming an unknown attribute or an unobserved value matches
    /// nothing.
    pub fn satisfies(&self, index: usize, conditions: &[Descriptor]) -> bool {
        conditions.iter().all(|d| {
            self.condition_index(&d.attribute)
                .is_some_and(|a| self.value(index, a) == &d.value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> RawTable {
        RawTable::from_strs(
            &["outlook", "windy", "play"],
            &[
                &["sunny", "false", "no"],
                &["rainy", "true", "no"],
                &["overcast", "false", "yes"],
                &["sunny", "true", "yes"],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_domains_in_first_seen_order() {
        let table = DecisionTable::from_source(&weather()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.conditions().len(), 2);
        assert_eq!(table.decision().name(), "play");
        assert_eq!(
            table.conditions()[0].domain(),
            &[
                Value::from("sunny"),
                Value::from("rainy"),
                Value::from("overcast")
            ]
        );
        assert_eq!(table.decision().domain(), &[Value::from("no"), Value::from("yes")]);
        assert_eq!(table.value(3, 1), &Value::Bool(true));
        assert_eq!(table.decision_value(2), &Value::from("yes"));
    }

    #[test]
    fn test_decision_column_can_be_in_the_middle() {
        let table = DecisionTable::from_source(&weather().with_decision("outlook")).unwrap();
        assert_eq!(table.decision().name(), "outlook");
        let names: Vec<&str> = table.conditions().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["windy", "play"]);
        assert_eq!(table.conditions()[1].column(), 2);
    }

    #[test]
    fn test_missing_decision_column() {
        let err = DecisionTable::from_source(&weather().with_decision("humidity")).unwrap_err();
        assert!(matches!(err, Error::MissingDecisionColumn(ref c) if c == "humidity"));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let raw = RawTable::from_strs(&["a", "a", "d"], &[&["1", "2", "y"], &["2", "1", "n"]])
            .unwrap();
        let err = DecisionTable::from_source(&raw).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn(ref c) if c == "a"));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_missing_cell() {
        let raw = RawTable::from_strs(&["a", "d"], &[&["1", "x"], &["2", ""]]).unwrap();
        let err = DecisionTable::from_source(&raw).unwrap_err();
        assert!(matches!(err, Error::MissingValue { row: 1, ref attribute } if attribute == "d"));
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = DecisionTable::from_source(&weather()).unwrap();
        let b = DecisionTable::from_source(&weather()).unwrap();
        let c = DecisionTable::from_source(&weather().with_decision("windy")).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn test_satisfies() {
        let table = DecisionTable::from_source(&weather()).unwrap();
        let sunny = vec![Descriptor::new("outlook", "sunny")];
        assert!(table.satisfies(0, &sunny));
        assert!(!table.satisfies(1, &sunny));
        assert!(!table.satisfies(0, &[Descriptor::new("humidity", "high")]));
        assert!(table.satisfies(2, &[]));
    }
}
