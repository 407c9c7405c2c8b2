//! Defines the builder of [`Id3`].
use tracing::debug;

use std::collections::{BTreeSet, HashSet};

use crate::attribute::{DiscreteAttribute, TargetAttribute};
use crate::constants::DEFAULT_PARALLEL;
use crate::error::{Id3Error, Result};
use crate::sample::Sample;
use super::id3_algorithm::Id3;


/// A struct that builds [`Id3`].
/// `Id3Builder` derives the attribute and target descriptors
/// from a [`Sample`] and checks that the sample can be learned from.
///
/// # Example
///
/// ```no_run
/// use id3_tree::{Id3Builder, SampleReader};
///
/// let sample = SampleReader::<_, &str>::default()
///     .file("/path/to/data/file.csv")
///     .read()
///     .unwrap();
/// let id3 = Id3Builder::new(&sample)
///     .parallel(false)
///     .build()
///     .unwrap();
/// let tree = id3.generate_tree();
/// println!("{tree}");
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    sample: &'a Sample,
    parallel: bool,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, candidate attributes are scored in parallel.
    pub fn new(sample: &'a Sample) -> Self {
        Self { sample, parallel: DEFAULT_PARALLEL, }
    }


    /// Set whether candidate attributes are scored in parallel.
    /// The resulting tree is the same either way.
    #[inline]
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    ///
    /// Returns `Err` before any node is built if
    /// the sample has no attribute column or no row,
    /// two columns share a label,
    /// or a column has no value.
    pub fn build(self) -> Result<Id3<'a>> {
        let (n_sample, n_feature) = self.sample.shape();
        if n_feature == 0 {
            return Err(Id3Error::TooFewColumns(n_feature + 1));
        }
        if n_sample == 0 {
            return Err(Id3Error::NoRows);
        }

        let target = TargetAttribute::from_feature(self.sample.target())?;

        let mut labels = HashSet::with_capacity(n_feature + 1);
        labels.insert(target.label());
        let attributes = self.sample.features()
            .iter()
            .map(|feature| {
                if !labels.insert(feature.name()) {
                    return Err(
                        Id3Error::DuplicateLabel(feature.name().to_string())
                    );
                }
                DiscreteAttribute::from_feature(feature)
            })
            .collect::<Result<BTreeSet<_>>>()?;

        debug!(
            attributes = attributes.len(),
            classes = target.len(),
            rows = n_sample,
            "derived descriptors"
        );

        Ok(Id3::new(self.sample, attributes, target, self.parallel))
    }
}
