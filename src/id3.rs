//! The ID3 decision tree induction.

pub mod builder;
pub mod id3_algorithm;
pub mod information_gain;
pub mod node;
pub mod printer;
pub mod tree;


pub use builder::Id3Builder;
pub use id3_algorithm::Id3;
pub use information_gain::InformationGain;
pub use node::{LeafKind, NodeId, TreeNode};
pub use printer::TreePrinter;
pub use tree::Id3Tree;
