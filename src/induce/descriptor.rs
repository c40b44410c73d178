//! Candidate descriptors and their match sets
//!
//! Every `(attribute, value)` pair observed in the table is a candidate. The
//! index is sorted once by the configured tie-break order, so during
//! selection a lower position always wins a tie.

use super::objects::ObjectSet;
use crate::config::TieBreak;
use crate::rules::Descriptor;
use crate::table::DecisionTable;
use std::cmp::Reverse;

/// A descriptor with its match set over the whole table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Conditional attribute index
    pub attribute: usize,
    /// Value code within the attribute's domain
    pub value: u32,
    /// Objects whose value for `attribute` is `value`
    pub matches: ObjectSet,
}

impl Candidate {
    /// Public form of this descriptor
    pub fn descriptor(&self, table: &DecisionTable) -> Descriptor {
        let attribute = &table.conditions()[self.attribute];
        Descriptor::new(attribute.name(), attribute.value(self.value).clone())
    }
}

/// All candidate descriptors of a table in tie-break order
#[derive(Debug, Clone)]
pub struct DescriptorIndex {
    candidates: Vec<Candidate>,
}

impl DescriptorIndex {
    /// Build match sets for every observed descriptor and order them
    pub fn build(table: &DecisionTable, tie_break: TieBreak) -> Self {
        let universe = table.len();
        let mut candidates: Vec<Candidate> = Vec::new();

        for (a, attribute) in table.conditions().iter().enumerate() {
            let mut sets = vec![ObjectSet::new(universe); attribute.domain().len()];
            for (index, object) in table.objects().iter().enumerate() {
                sets[object.code(a) as usize].insert(index);
            }
            candidates.extend(sets.into_iter().enumerate().map(|(code, matches)| Candidate {
                attribute: a,
                value: code as u32,
                matches,
            }));
        }

        // Match-set sizes are popcounts, so compute them once
        let mut keyed: Vec<(usize, Candidate)> =
            candidates.into_iter().map(|c| (c.matches.len(), c)).collect();
        let conditions = table.conditions();
        match tie_break {
            TieBreak::MatchSize => keyed.sort_by(|(len_a, a), (len_b, b)| {
                let (attr_a, attr_b) = (&conditions[a.attribute], &conditions[b.attribute]);
                len_b
                    .cmp(len_a)
                    .then_with(|| attr_a.name().cmp(attr_b.name()))
                    .then_with(|| attr_a.value(a.value).cmp(attr_b.value(b.value)))
                    // Duplicate header names
                    .then_with(|| a.attribute.cmp(&b.attribute))
            }),
            TieBreak::ColumnOrder => {
                keyed.sort_by_key(|(len, c)| (Reverse(*len), c.attribute, c.value))
            }
        }

        DescriptorIndex {
            candidates: keyed.into_iter().map(|(_, c)| c).collect(),
        }
    }

    /// Candidate at tie-break position `position`
    pub fn get(&self, position: usize) -> &Candidate {
        &self.candidates[position]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RawTable, Value};

    fn table() -> DecisionTable {
        let raw = RawTable::from_strs(
            &["b", "a", "d"],
            &[
                &["q", "z", "1"],
                &["p", "y", "1"],
                &["q", "y", "2"],
                &["r", "y", "2"],
            ],
        )
        .unwrap();
        DecisionTable::from_source(&raw).unwrap()
    }

    fn order(index: &DescriptorIndex, table: &DecisionTable) -> Vec<String> {
        index.iter().map(|c| c.descriptor(table).to_string()).collect()
    }

    #[test]
    fn test_match_sets() {
        let table = table();
        let index = DescriptorIndex::build(&table, TieBreak::MatchSize);
        assert_eq!(index.len(), 5);
        let q = index
            .iter()
            .find(|c| c.descriptor(&table) == Descriptor::new("b", "q"))
            .unwrap();
        assert_eq!(q.matches.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_match_size_order() {
        let table = table();
        let index = DescriptorIndex::build(&table, TieBreak::MatchSize);
        // a = y (3), b = q (2), then singletons by attribute name then value
        assert_eq!(
            order(&index, &table),
            vec!["a = y", "b = q", "a = z", "b = p", "b = r"]
        );
    }

    #[test]
    fn test_column_order() {
        let table = table();
        let index = DescriptorIndex::build(&table, TieBreak::ColumnOrder);
        // Singletons by column position then first-seen value
        assert_eq!(
            order(&index, &table),
            vec!["a = y", "b = q", "b = p", "b = r", "a = z"]
        );
        assert_eq!(index.get(0).descriptor(&table).value, Value::from("y"));
    }
}
