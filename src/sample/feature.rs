//! Defines a categorical column.
use std::collections::BTreeSet;
use std::ops::Index;

use crate::constants::BUFFER_SIZE;


/// A categorical column.
/// Each cell is kept as the string read from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Feature name
    name: String,
    /// Feature values.
    vals: Vec<String>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }


    /// Construct a feature named `name` holding `vals`.
    pub fn from_vals<T, I, S>(name: T, vals: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = S>,
              S: ToString,
    {
        let vals = vals.into_iter()
            .map(|v| v.to_string())
            .collect();
        Self { name: name.to_string(), vals, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Append an example to this feature.
    pub fn append<S: ToString>(&mut self, val: S) {
        self.vals.push(val.to_string());
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if this feature holds no item.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns the value at `row`.
    #[inline]
    pub fn value(&self, row: usize) -> &str {
        &self.vals[row]
    }


    /// Returns the distinct values of this feature in sorted order.
    pub fn unique_values(&self) -> BTreeSet<String> {
        self.vals.iter()
            .cloned()
            .collect()
    }


    /// Returns the number of distinct values.
    pub fn distinct_value_count(&self) -> usize {
        self.vals.iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .len()
    }


    /// Returns the rows in `rows` whose value equals `value`.
    /// The relative order of `rows` is kept.
    #[inline]
    pub fn filter_eq(&self, rows: &[usize], value: &str) -> Vec<usize> {
        rows.iter()
            .copied()
            .filter(|&i| self.vals[i] == value)
            .collect()
    }


    /// Counts the rows in `rows` whose value equals `value`.
    #[inline]
    pub fn count_eq(&self, rows: &[usize], value: &str) -> usize {
        rows.iter()
            .filter(|&&i| self.vals[i] == value)
            .count()
    }
}


impl Index<usize> for Feature {
    type Output = str;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
