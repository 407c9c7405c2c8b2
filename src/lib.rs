#![warn(missing_docs)]

//!
//! A crate that grows decision trees over categorical data
//! with the ID3 algorithm.
//!
//! Every column of the dataset but the target is a discrete attribute.
//! Starting from the whole dataset,
//! [`Id3`] splits each impure node on the attribute
//! that minimizes the conditional entropy of the class,
//! one child per attribute value,
//! until every leaf is pure or no attribute remains.
//!
//! ```no_run
//! use id3_tree::prelude::*;
//!
//! let sample = SampleReader::<_, &str>::default()
//!     .file("/path/to/play_tennis.csv")
//!     .read()
//!     .unwrap();
//! let tree = Id3Builder::new(&sample)
//!     .build()
//!     .unwrap()
//!     .generate_tree();
//! println!("{tree}");
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod attribute;
pub mod id3;
pub mod prelude;


pub use sample::{Sample, SampleReader, Feature};
pub use attribute::{DiscreteAttribute, TargetAttribute};
pub use id3::{
    Id3,
    Id3Builder,
    Id3Tree,
    InformationGain,
    LeafKind,
    NodeId,
    TreeNode,
    TreePrinter,
};
pub use error::{Id3Error, Result};
