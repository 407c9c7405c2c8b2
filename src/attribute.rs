//! Descriptors of categorical columns.
use serde::{Serialize, Deserialize};

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;

use crate::error::{Id3Error, Result};
use crate::sample::Feature;


/// A categorical column: its label and the values it can take.
///
/// Equality, hashing, and ordering are structural over
/// `(label, sorted values)`,
/// so attributes can be kept in and removed from sets.
/// Sets of attributes iterate in the lexical order of the labels.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
pub struct DiscreteAttribute {
    label: String,
    values: BTreeSet<String>,
}


impl DiscreteAttribute {
    /// Construct a new attribute.
    /// Returns `Err` if `values` is empty.
    pub fn new<T, I, S>(label: T, values: I) -> Result<Self>
        where T: ToString,
              I: IntoIterator<Item = S>,
              S: ToString,
    {
        let label = label.to_string();
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect::<BTreeSet<_>>();

        if values.is_empty() {
            return Err(Id3Error::EmptyAttribute(label));
        }
        Ok(Self { label, values })
    }


    /// Construct the attribute describing `feature`.
    /// The values are the distinct values observed in the column.
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        Self::new(feature.name(), feature.unique_values())
    }


    /// Returns the label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the values in sorted order.
    #[inline]
    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }


    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Always `false`; an attribute has at least one value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl fmt::Display for DiscreteAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values.iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} {{{values}}}", self.label)
    }
}


/// The column being predicted.
/// Same shape as [`DiscreteAttribute`], distinct role.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash,
    Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct TargetAttribute(DiscreteAttribute);


impl TargetAttribute {
    /// Construct a new target.
    /// Returns `Err` if `values` is empty.
    pub fn new<T, I, S>(label: T, values: I) -> Result<Self>
        where T: ToString,
              I: IntoIterator<Item = S>,
              S: ToString,
    {
        let label = label.to_string();
        DiscreteAttribute::new(&label, values)
            .map(Self)
            .map_err(|_| Id3Error::EmptyTarget(label))
    }


    /// Construct the target describing `feature`.
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        Self::new(feature.name(), feature.unique_values())
    }
}


impl Deref for TargetAttribute {
    type Target = DiscreteAttribute;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


impl From<TargetAttribute> for DiscreteAttribute {
    fn from(target: TargetAttribute) -> Self {
        target.0
    }
}


impl fmt::Display for TargetAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target {}", self.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;


    #[test]
    fn equality_is_structural() {
        let a = DiscreteAttribute::new("Wind", ["Weak", "Strong"]).unwrap();
        let b = DiscreteAttribute::new("Wind", ["Strong", "Weak", "Weak"])
            .unwrap();
        let c = DiscreteAttribute::new("Wind", ["Weak"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set = HashSet::from([a.clone()]);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }


    #[test]
    fn removal_does_not_touch_clones() {
        let wind = DiscreteAttribute::new("Wind", ["Weak", "Strong"]).unwrap();
        let outlook = DiscreteAttribute::new("Outlook", ["Sunny"]).unwrap();

        let parent = BTreeSet::from([wind.clone(), outlook.clone()]);
        let mut child = parent.clone();
        child.remove(&wind);

        assert_eq!(parent.len(), 2);
        assert_eq!(child.into_iter().collect::<Vec<_>>(), vec![outlook]);
    }


    #[test]
    fn set_order_is_lexical_by_label() {
        let set = BTreeSet::from([
            DiscreteAttribute::new("b", ["x"]).unwrap(),
            DiscreteAttribute::new("a", ["z"]).unwrap(),
            DiscreteAttribute::new("c", ["y"]).unwrap(),
        ]);
        let labels = set.iter()
            .map(DiscreteAttribute::label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }


    #[test]
    fn empty_values_are_rejected() {
        let err = DiscreteAttribute::new("Wind", Vec::<String>::new())
            .unwrap_err();
        assert!(matches!(err, Id3Error::EmptyAttribute(ref l) if l == "Wind"));

        let err = TargetAttribute::new("Play", Vec::<String>::new())
            .unwrap_err();
        assert!(matches!(err, Id3Error::EmptyTarget(ref l) if l == "Play"));
    }


    #[test]
    fn display() {
        let a = DiscreteAttribute::new("Wind", ["Weak", "Strong"]).unwrap();
        assert_eq!(a.to_string(), "Wind {Strong, Weak}");
        let t = TargetAttribute::new("Play", ["Yes", "No"]).unwrap();
        assert_eq!(t.to_string(), "target Play {No, Yes}");
    }
}
