//! Discernibility between one decision class and the rest of the table
//!
//! Objects of the class are positive, all others negative. A conjunction is
//! safe when its match set admits no negative object. Adding a descriptor can
//! only shrink a match set, so the sets a growing rule admits are narrowed in
//! place instead of being recomputed from the full conjunction.

use super::descriptor::Candidate;
use super::objects::ObjectSet;
use crate::table::{DecisionClass, DecisionTable};

/// Positive hit / negative hit of a descriptor against a rule under construction
///
/// For the empty conjunction these are `|match(d) ∩ uncovered|` and
/// `|match(d) ∩ negatives|`; later they are taken within the rule's match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Uncovered positive objects still admitted after adding the descriptor
    pub positive: usize,
    /// Negative objects still admitted after adding the descriptor
    pub negative: usize,
}

impl Score {
    pub fn is_safe(&self) -> bool {
        self.negative == 0
    }
}

/// Positive and negative object sets of one class
#[derive(Debug, Clone)]
pub struct Discernibility {
    positives: ObjectSet,
    negatives: ObjectSet,
    attributes: usize,
}

impl Discernibility {
    pub fn new(table: &DecisionTable, class: &DecisionClass) -> Self {
        let positives = ObjectSet::from_indices(table.len(), class.objects().iter().copied());
        let negatives = positives.complement();
        Discernibility {
            positives,
            negatives,
            attributes: table.conditions().len(),
        }
    }

    pub fn positives(&self) -> &ObjectSet {
        &self.positives
    }

    pub fn negatives(&self) -> &ObjectSet {
        &self.negatives
    }

    /// Begin a rule with the empty conjunction, which admits every object
    pub fn start_rule(&self, uncovered: &ObjectSet) -> RuleGrowth {
        RuleGrowth {
            uncovered: uncovered.clone(),
            covered: self.positives.clone(),
            negatives: self.negatives.clone(),
            used: vec![false; self.attributes],
            chosen: Vec::new(),
        }
    }
}

/// Match sets admitted by a partially built rule
#[derive(Debug, Clone)]
pub struct RuleGrowth {
    /// Still-uncovered positives matched by the conjunction
    uncovered: ObjectSet,
    /// All positives matched by the conjunction
    covered: ObjectSet,
    /// Negatives matched by the conjunction
    negatives: ObjectSet,
    used: Vec<bool>,
    chosen: Vec<usize>,
}

impl RuleGrowth {
    /// Whether the conjunction so far admits no negative object
    pub fn is_safe(&self) -> bool {
        self.negatives.is_empty()
    }

    /// Whether `attribute` already carries a descriptor in this rule
    pub fn uses(&self, attribute: usize) -> bool {
        self.used[attribute]
    }

    /// Negatives currently admitted
    pub fn negative_count(&self) -> usize {
        self.negatives.len()
    }

    /// Score of the conjunction extended by `candidate`
    pub fn score(&self, candidate: &Candidate) -> Score {
        Score {
            positive: self.uncovered.intersection_count(&candidate.matches),
            negative: self.negatives.intersection_count(&candidate.matches),
        }
    }

    /// Extend the conjunction with the candidate at index position `position`
    pub fn narrow(&mut self, position: usize, candidate: &Candidate) {
        self.uncovered.intersect_with(&candidate.matches);
        self.covered.intersect_with(&candidate.matches);
        self.negatives.intersect_with(&candidate.matches);
        self.used[candidate.attribute] = true;
        self.chosen.push(position);
    }

    /// Uncovered positives the finished rule covers
    pub fn newly_covered(&self) -> &ObjectSet {
        &self.uncovered
    }

    /// All positives the rule covers
    pub fn covered(&self) -> &ObjectSet {
        &self.covered
    }

    /// Index positions of the chosen descriptors, in selection order
    pub fn chosen(&self) -> &[usize] {
        &self.chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;
    use crate::induce::descriptor::DescriptorIndex;
    use crate::rules::Descriptor;
    use crate::table::{partition, RawTable, Value};

    fn table() -> DecisionTable {
        let raw = RawTable::from_strs(
            &["color", "size", "label"],
            &[
                &["red", "big", "pos"],
                &["red", "small", "pos"],
                &["blue", "big", "pos"],
                &["red", "big", "neg"],
                &["blue", "small", "neg"],
            ],
        )
        .unwrap();
        DecisionTable::from_source(&raw).unwrap()
    }

    fn find<'a>(
        index: &'a DescriptorIndex,
        table: &DecisionTable,
        a: &str,
        v: &str,
    ) -> (usize, &'a Candidate) {
        let wanted = Descriptor::new(a, v);
        index
            .iter()
            .enumerate()
            .find(|(_, c)| c.descriptor(table) == wanted)
            .unwrap()
    }

    #[test]
    fn test_hits() {
        let table = table();
        let partition = partition(&table);
        let class = partition.get(&Value::from("pos")).unwrap();
        let index = DescriptorIndex::build(&table, TieBreak::MatchSize);
        let eval = Discernibility::new(&table, class);

        let (_, red) = find(&index, &table, "color", "red");
        let growth = eval.start_rule(eval.positives());
        assert_eq!(growth.score(red), Score { positive: 2, negative: 1 });
        assert_eq!(eval.negatives().iter().collect::<Vec<_>>(), vec![3, 4]);

        // Positive hits count only what is still uncovered
        let (_, big) = find(&index, &table, "size", "big");
        let uncovered = ObjectSet::from_indices(table.len(), [2]);
        let growth = eval.start_rule(&uncovered);
        assert_eq!(growth.score(big), Score { positive: 1, negative: 1 });
    }

    #[test]
    fn test_narrowing_is_monotonic() {
        let table = table();
        let partition = partition(&table);
        let class = partition.get(&Value::from("pos")).unwrap();
        let index = DescriptorIndex::build(&table, TieBreak::MatchSize);
        let eval = Discernibility::new(&table, class);

        let mut growth = eval.start_rule(eval.positives());
        assert!(!growth.is_safe());
        assert_eq!(growth.negative_count(), 2);

        let (pos, red) = find(&index, &table, "color", "red");
        assert_eq!(growth.score(red), Score { positive: 2, negative: 1 });
        growth.narrow(pos, red);
        assert!(growth.uses(red.attribute));
        assert!(!growth.is_safe());

        let (pos, small) = find(&index, &table, "size", "small");
        let score = growth.score(small);
        assert!(score.is_safe());
        assert_eq!(score.positive, 1);
        growth.narrow(pos, small);
        assert!(growth.is_safe());
        assert_eq!(growth.covered().iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(growth.chosen().len(), 2);
    }
}
