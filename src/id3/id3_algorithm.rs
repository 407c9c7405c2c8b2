//! Defines the work-list induction.
use tracing::{debug, info, trace};

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::attribute::{DiscreteAttribute, TargetAttribute};
use crate::sample::Sample;
use super::{
    information_gain::InformationGain,
    node::*,
    tree::Id3Tree,
};


/// The ID3 algorithm.
/// Given a categorical [`Sample`],
/// [`Id3`] grows a decision tree named [`Id3Tree`]
/// by splitting every impure node on the attribute
/// that minimizes the conditional entropy of the class.
///
/// The code is based on:
/// J. R. Quinlan, *Induction of Decision Trees*,
/// Machine Learning 1, 81–106 (1986).
///
/// [`Id3`] is constructed by [`Id3Builder`](super::Id3Builder).
///
/// # Example
/// ```no_run
/// use id3_tree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("Play")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new(&sample)
///     .build()
///     .unwrap();
/// let tree = id3.generate_tree();
///
/// for id in tree.preorder() {
///     let node = &tree[id];
///     println!("{:?} -> {} instances", node.selected_attribute(), node.n_instances());
/// }
/// ```
pub struct Id3<'a> {
    sample: &'a Sample,
    attributes: BTreeSet<DiscreteAttribute>,
    target: TargetAttribute,
    parallel: bool,
}


impl<'a> Id3<'a> {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(
        sample: &'a Sample,
        attributes: BTreeSet<DiscreteAttribute>,
        target: TargetAttribute,
        parallel: bool,
    ) -> Self
    {
        Self { sample, attributes, target, parallel, }
    }


    /// Returns the candidate attributes of the root.
    pub fn attributes(&self) -> &BTreeSet<DiscreteAttribute> {
        &self.attributes
    }


    /// Returns the target.
    pub fn target(&self) -> &TargetAttribute {
        &self.target
    }


    /// Returns the scorer used to pick split attributes.
    pub fn information_gain(&self) -> InformationGain<'_> {
        InformationGain::new(self.sample, &self.target)
            .parallel(self.parallel)
    }


    /// Grow the tree.
    ///
    /// Nodes are expanded from a work list.
    /// A split node gets one child per value of its attribute,
    /// in sorted value order,
    /// even if no instance takes that value.
    pub fn generate_tree(&self) -> Id3Tree {
        let criterion = self.information_gain();
        let column = self.sample.target();
        let (n_sample, _) = self.sample.shape();

        info!(
            rows = n_sample,
            attributes = self.attributes.len(),
            target = self.target.label(),
            "growing an ID3 tree"
        );

        let root = TreeNode::root(
            (0..n_sample).collect(),
            self.attributes.clone(),
            column,
            &self.target,
        );
        let mut tree = Id3Tree::new(self.target.clone(), root);

        let mut pending = VecDeque::from([tree.root()]);
        while let Some(id) = pending.pop_front() {
            let node = &tree[id];
            if node.is_leaf() { continue; }

            // A node without attributes is already an exhausted leaf.
            let (best, score) = criterion.select(&node.attributes, &node.instances)
                .map(|(attribute, score)| (attribute.clone(), score))
                .expect("A split node has at least one attribute");
            debug!(
                node = id.index(),
                depth = node.depth,
                attribute = best.label(),
                score,
                "split"
            );

            let feature = &self.sample[best.label()];
            let mut remaining = node.attributes.clone();
            remaining.remove(&best);

            let depth = node.depth + 1;
            let fallback = node.class.as_deref();
            let children = best.values()
                .iter()
                .map(|value| {
                    let subset = feature.filter_eq(&node.instances, value);
                    TreeNode::child(
                        subset,
                        remaining.clone(),
                        id,
                        value,
                        depth,
                        column,
                        &self.target,
                        fallback,
                    )
                })
                .collect::<Vec<_>>();

            tree.node_mut(id).selected_attribute = Some(best.label().to_string());

            for child in children {
                trace!(
                    parent = id.index(),
                    value = child.incoming_edge_value(),
                    instances = child.n_instances(),
                    leaf = ?child.leaf_kind(),
                    "child"
                );
                let is_leaf = child.is_leaf();
                let child = tree.push(child);
                if !is_leaf {
                    pending.push_back(child);
                }
            }
        }

        info!(
            nodes = tree.len(),
            leaves = tree.n_leaves(),
            depth = tree.depth(),
            "finished growing"
        );
        tree
    }
}


impl fmt::Display for Id3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3\n\n\
            - {}\n\
            - Parallel scoring: {}\n\
            - Attributes:\
            ",
            self.target,
            self.parallel,
        )?;

        for attribute in self.attributes.iter() {
            writeln!(f, "\t* {attribute}")?;
        }

        write!(f, "----------")
    }
}
