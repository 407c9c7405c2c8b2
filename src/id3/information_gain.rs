//! Entropy-based scoring of candidate attributes.
use rayon::prelude::*;

use std::collections::BTreeSet;

use crate::attribute::{DiscreteAttribute, TargetAttribute};
use crate::constants::NUMERIC_TOLERANCE;
use crate::sample::Sample;


/// Scores attributes against partitions of a [`Sample`].
/// The target is carried here, not looked up from global state.
#[derive(Clone, Copy)]
pub struct InformationGain<'a> {
    sample: &'a Sample,
    target: &'a TargetAttribute,
    parallel: bool,
}


impl<'a> InformationGain<'a> {
    /// Construct a scorer over `sample` for the class `target`.
    pub fn new(sample: &'a Sample, target: &'a TargetAttribute) -> Self {
        Self { sample, target, parallel: false }
    }


    /// Score candidates on the rayon thread pool.
    /// The selected attribute does not depend on this flag.
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Returns the class entropy `-Σ p log2 p` of the rows in `rows`.
    /// An empty partition has entropy `0`.
    pub fn entropy(&self, rows: &[usize]) -> f64 {
        if rows.is_empty() { return 0f64; }

        let column = self.sample.target();
        let total = rows.len() as f64;
        self.target.values()
            .iter()
            .map(|c| {
                let p = column.count_eq(rows, c) as f64 / total;
                if p > 0f64 { -p * p.log2() } else { 0f64 }
            })
            .sum::<f64>()
    }


    /// Returns the weighted conditional entropy of the class
    /// given `attribute` over the rows in `rows`.
    /// Lower is better.
    ///
    /// A value of `attribute` that no row takes contributes `0`.
    ///
    /// # Panics
    /// Panics if `attribute` is not an attribute column of the sample,
    /// e.g., the target.
    pub fn score(&self, attribute: &DiscreteAttribute, rows: &[usize]) -> f64 {
        if rows.is_empty() { return 0f64; }

        let column = &self.sample[attribute.label()];
        let total = rows.len() as f64;
        attribute.values()
            .iter()
            .map(|v| {
                let subset = column.filter_eq(rows, v);
                if subset.is_empty() { return 0f64; }

                let weight = subset.len() as f64 / total;
                weight * self.entropy(&subset)
            })
            .sum::<f64>()
    }


    /// Returns the information gain of splitting `rows` on `attribute`,
    /// i.e., `entropy(rows) - score(attribute, rows)`.
    pub fn gain(&self, attribute: &DiscreteAttribute, rows: &[usize]) -> f64 {
        (self.entropy(rows) - self.score(attribute, rows)).max(0f64)
    }


    /// Returns the attribute with the smallest score and the score.
    /// Scores within [`NUMERIC_TOLERANCE`] of the smallest one are ties,
    /// and ties are broken by the lexical order of the labels.
    /// Returns `None` if `attributes` is empty.
    pub fn select<'b>(
        &self,
        attributes: &'b BTreeSet<DiscreteAttribute>,
        rows: &[usize],
    ) -> Option<(&'b DiscreteAttribute, f64)>
    {
        // Kept in label order.
        let scores = if self.parallel {
            attributes.par_iter()
                .map(|attr| (attr, self.score(attr, rows)))
                .collect::<Vec<_>>()
        } else {
            attributes.iter()
                .map(|attr| (attr, self.score(attr, rows)))
                .collect::<Vec<_>>()
        };

        let min = scores.iter()
            .map(|(_, score)| *score)
            .min_by(f64::total_cmp)?;

        scores.into_iter()
            .find(|(_, score)| *score - min <= NUMERIC_TOLERANCE)
    }
}
