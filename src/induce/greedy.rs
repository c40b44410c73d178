//! Greedy covering rule builder ("Heuristic M")
//!
//! For one decision class the builder repeatedly grows a rule from the empty
//! conjunction until it admits no negative object, removes the rule's
//! positive coverage from the uncovered set, and starts the next rule. The
//! class either ends fully covered or yields no rules at all.
//!
//! ## Selection
//!
//! A descriptor is eligible when its attribute is not yet in the rule, it
//! keeps at least `min_support` uncovered positives admitted, and it strictly
//! reduces the negatives the rule admits. Safe eligible descriptors are
//! preferred; within the preferred group the largest positive hit wins, and
//! remaining ties go to the lower position in the [`DescriptorIndex`].

use super::descriptor::DescriptorIndex;
use super::discern::{Discernibility, RuleGrowth, Score};
use crate::config::InductionConfig;
use crate::rules::Rule;
use crate::table::{DecisionClass, DecisionTable};
use rayon::prelude::*;
use std::cmp::Reverse;
use tracing::debug;

/// Candidate counts at or above this are scored on the rayon pool
const PARALLEL_SCORING_THRESHOLD: usize = 256;

/// Rule builder bound to one table
pub struct HeuristicM<'a> {
    table: &'a DecisionTable,
    index: &'a DescriptorIndex,
    config: &'a InductionConfig,
}

impl<'a> HeuristicM<'a> {
    pub fn new(
        table: &'a DecisionTable,
        index: &'a DescriptorIndex,
        config: &'a InductionConfig,
    ) -> Self {
        HeuristicM {
            table,
            index,
            config,
        }
    }

    /// Cover `class` with consistent rules, or `None` if it cannot be covered
    pub fn induce_class(&self, class: &DecisionClass) -> Option<Vec<Rule>> {
        let eval = Discernibility::new(self.table, class);
        let mut uncovered = eval.positives().clone();
        let mut rules = Vec::new();

        while !uncovered.is_empty() {
            let mut growth = eval.start_rule(&uncovered);

            while !growth.is_safe() {
                let Some(position) = self.select(&growth) else {
                    debug!(
                        class = %class.value(),
                        uncovered = uncovered.len(),
                        "no eligible descriptor, class cannot be covered"
                    );
                    return None;
                };
                growth.narrow(position, self.index.get(position));
            }

            uncovered.difference_with(growth.newly_covered());
            let rule = self.finish(&growth, class);
            debug!(
                class = %class.value(),
                rule = %rule,
                remaining = uncovered.len(),
                "rule finalized"
            );
            rules.push(rule);
        }

        Some(rules)
    }

    /// Index position of the best eligible descriptor for `growth`
    fn select(&self, growth: &RuleGrowth) -> Option<usize> {
        let admitted = growth.negative_count();
        let min_support = self.config.min_support;

        let eligible = |position: usize| -> Option<(Score, usize)> {
            let candidate = self.index.get(position);
            if growth.uses(candidate.attribute) {
                return None;
            }
            let score = growth.score(candidate);
            (score.positive >= min_support && score.negative < admitted)
                .then_some((score, position))
        };
        // Safe first, then larger positive hit, then index position
        let rank = |&(score, position): &(Score, usize)| {
            (!score.is_safe(), Reverse(score.positive), position)
        };

        let best = if self.config.parallel && self.index.len() >= PARALLEL_SCORING_THRESHOLD {
            (0..self.index.len())
                .into_par_iter()
                .filter_map(eligible)
                .min_by_key(rank)
        } else {
            (0..self.index.len()).filter_map(eligible).min_by_key(rank)
        };

        best.map(|(_, position)| position)
    }

    fn finish(&self, growth: &RuleGrowth, class: &DecisionClass) -> Rule {
        Rule {
            conditions: growth
                .chosen()
                .iter()
                .map(|&p| self.index.get(p).descriptor(self.table))
                .collect(),
            decision: class.value().clone(),
            support: growth.covered().len(),
        }
    }
}
