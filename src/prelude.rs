//! Exports the reader, the builder, and the tree types.
//!
pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};


pub use crate::attribute::{
    DiscreteAttribute,
    TargetAttribute,
};


pub use crate::id3::{
    Id3,
    Id3Builder,
    Id3Tree,
    InformationGain,
    LeafKind,
    NodeId,
    TreeNode,
    TreePrinter,
};


pub use crate::error::{
    Id3Error,
    Result,
};
