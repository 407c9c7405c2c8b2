//! Defines the categorical dataset.
use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;
use tracing::debug;

use super::feature::*;
use crate::error::{Id3Error, Result};


/// Struct `Sample` holds a categorical dataset.
/// Every column but the target is a candidate attribute.
#[derive(Debug, Clone)]
pub struct Sample {
    name_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    target: Feature,
    n_sample: usize,
    n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from columns.
    /// The last column becomes the target.
    ///
    /// Returns `Err` if there are fewer than 2 columns,
    /// no rows, duplicated labels, or columns of different lengths.
    pub fn from_features(mut features: Vec<Feature>) -> Result<Self> {
        if features.len() < 2 {
            return Err(Id3Error::TooFewColumns(features.len()));
        }

        let n_sample = features[0].len();
        if n_sample == 0 {
            return Err(Id3Error::NoRows);
        }

        let mut name_to_index = HashMap::with_capacity(features.len());
        for (i, feat) in features.iter().enumerate() {
            if feat.len() != n_sample {
                return Err(Id3Error::ColumnLength {
                    column: feat.name().to_string(),
                    expected: n_sample,
                    found: feat.len(),
                });
            }
            let name = feat.name().to_string();
            if name_to_index.insert(name.clone(), i).is_some() {
                return Err(Id3Error::DuplicateLabel(name));
            }
        }

        let Some(target) = features.pop() else {
            return Err(Id3Error::TooFewColumns(0));
        };
        name_to_index.remove(target.name());
        let n_feature = features.len();

        Ok(Self { name_to_index, features, target, n_sample, n_feature, })
    }


    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    ///
    /// If the CSV file does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    pub(crate) fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read a CSV from [`BufReader`].
    /// Cells are separated by `,` and trimmed.
    /// Blank lines are skipped.
    pub fn from_reader<R>(reader: BufReader<R>, mut has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        let mut features: Vec<Feature> = Vec::new();
        let mut n_sample = 0_usize;

        // For each line of the file
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            if has_header {
                features = cells.into_iter()
                    .map(Feature::new)
                    .collect();
                has_header = false;
                continue;
            }

            // If the header does not exist,
            // construct a dummy header.
            if features.is_empty() {
                features = (1..=cells.len())
                    .map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect();
            }

            if cells.len() != features.len() {
                return Err(Id3Error::RaggedRow {
                    line: i + 1,
                    expected: features.len(),
                    found: cells.len(),
                });
            }

            for (feat, cell) in features.iter_mut().zip(cells) {
                if cell.is_empty() {
                    return Err(Id3Error::MissingValue {
                        column: feat.name().to_string(),
                        row: n_sample,
                    });
                }
                feat.append(cell);
            }
            n_sample += 1;
        }
        debug!(
            rows = n_sample,
            columns = features.len(),
            "read a categorical sample"
        );

        Self::from_features(features)
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// Every column is cast to a string column;
    /// the last column becomes the target.
    /// Null cells are rejected.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let features = data.get_columns()
            .par_iter()
            .map(|series| -> Result<Feature> {
                let name = series.name();
                let casted = series.cast(&DataType::Utf8)?;
                let vals = casted.utf8()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, v)| {
                        v.map(str::to_string)
                            .ok_or_else(|| Id3Error::MissingValue {
                                column: name.to_string(),
                                row,
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Feature::from_vals(name, vals))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_features(features)
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old target is moved to the end of the attribute columns.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        if self.target.name() == target {
            return Ok(self);
        }

        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| Id3Error::UnknownTarget(target.to_string()))?;

        let new_target = self.features.remove(pos);
        let old_target = std::mem::replace(&mut self.target, new_target);
        self.features.push(old_target);

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(self)
    }


    /// Returns a slice of the attribute columns.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the target column.
    pub fn target(&self) -> &Feature {
        &self.target
    }


    /// Returns the attribute column named `name`.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&i| &self.features[i])
    }


    /// Returns the pair of the number of examples and
    /// the number of attribute columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;
    fn index(&self, name: S) -> &Self::Output {
        let name = name.as_ref();
        self.feature(name)
            .unwrap_or_else(|| panic!("The feature `{name}` does not exist"))
    }
}
