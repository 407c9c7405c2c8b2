//! Defines a builder that reads a CSV file.
use std::path::Path;

use super::sample_struct::Sample;
use crate::constants::DEFAULT_HAS_HEADER;
use crate::error::Result;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file of categorical values.
/// The last column is the target unless
/// [`SampleReader::target_feature`] names another one.
/// # Example
/// ```no_run
/// use id3_tree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: DEFAULT_HAS_HEADER,
            target: None,
        }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics if no file is set.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .expect("The file name for csv is not set");

        let sample = Sample::from_csv(file, self.has_header)?;
        match self.target {
            Some(target) => sample.set_target(target),
            None => Ok(sample),
        }
    }
}
