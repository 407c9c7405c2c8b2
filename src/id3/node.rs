//! Defines the node of the induction tree.
use serde::{Serialize, Deserialize};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::attribute::{DiscreteAttribute, TargetAttribute};
use crate::sample::Feature;


/// Index of a node in an [`Id3Tree`](super::Id3Tree).
/// Parents are referred to by `NodeId`,
/// so a child never owns its parent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(pub(super) usize);


impl NodeId {
    /// Returns the position of the node in its tree.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}


impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// The reason a node stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafKind {
    /// Every instance shares one target value.
    Pure,
    /// No attribute remains but the instances have mixed classes.
    /// The leaf reports the majority class.
    Exhausted,
    /// No instance reached this node.
    /// The leaf reports the majority class of its parent.
    Empty,
}


impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pure => "pure",
            Self::Exhausted => "exhausted",
            Self::Empty => "empty",
        };
        write!(f, "{name}")
    }
}


/// A node of the induction tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    // Rows of the sample that reach this node.
    pub(super) instances: Vec<usize>,

    // Attributes still usable beneath this node.
    pub(super) attributes: BTreeSet<DiscreteAttribute>,

    pub(super) parent: Option<NodeId>,

    pub(super) children: Vec<NodeId>,

    // `Some(_)` iff this node is a leaf.
    pub(super) leaf: Option<LeafKind>,

    pub(super) selected_attribute: Option<String>,

    pub(super) incoming_edge_value: Option<String>,

    pub(super) depth: usize,

    // Number of instances per target value.
    pub(super) class_counts: BTreeMap<String, usize>,

    // Majority class, or the parent's one for an empty partition.
    pub(super) class: Option<String>,
}


impl TreeNode {
    /// Construct the root node holding every row of the sample.
    pub(super) fn root(
        instances: Vec<usize>,
        attributes: BTreeSet<DiscreteAttribute>,
        column: &Feature,
        target: &TargetAttribute,
    ) -> Self
    {
        Self::new(instances, attributes, None, None, 0, column, target, None)
    }


    /// Construct a child of `parent`
    /// reached through the edge labeled `edge_value`.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn child(
        instances: Vec<usize>,
        attributes: BTreeSet<DiscreteAttribute>,
        parent: NodeId,
        edge_value: &str,
        depth: usize,
        column: &Feature,
        target: &TargetAttribute,
        fallback: Option<&str>,
    ) -> Self
    {
        Self::new(
            instances,
            attributes,
            Some(parent),
            Some(edge_value.to_string()),
            depth,
            column,
            target,
            fallback,
        )
    }


    #[allow(clippy::too_many_arguments)]
    fn new(
        instances: Vec<usize>,
        attributes: BTreeSet<DiscreteAttribute>,
        parent: Option<NodeId>,
        incoming_edge_value: Option<String>,
        depth: usize,
        column: &Feature,
        target: &TargetAttribute,
        fallback: Option<&str>,
    ) -> Self
    {
        let class_counts = target.values()
            .iter()
            .map(|c| (c.clone(), column.count_eq(&instances, c)))
            .collect::<BTreeMap<_, _>>();

        let n_instances = instances.len();
        let leaf = leaf_kind(&class_counts, n_instances, attributes.is_empty());

        let class = match leaf {
            Some(LeafKind::Empty) => fallback.map(str::to_string),
            _ => majority(&class_counts),
        };

        Self {
            instances,
            attributes,
            parent,
            children: Vec::new(),
            leaf,
            selected_attribute: None,
            incoming_edge_value,
            depth,
            class_counts,
            class,
        }
    }


    /// Returns the rows of the sample that reach this node.
    #[inline]
    pub fn instances(&self) -> &[usize] {
        &self.instances[..]
    }


    /// Returns the number of instances.
    #[inline]
    pub fn n_instances(&self) -> usize {
        self.instances.len()
    }


    /// Returns the attributes still usable beneath this node.
    #[inline]
    pub fn attributes(&self) -> &BTreeSet<DiscreteAttribute> {
        &self.attributes
    }


    /// Returns the parent, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }


    /// Returns the children in the order of the split values.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children[..]
    }


    /// Returns `true` if this node is terminal.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }


    /// Returns why this node is a leaf, or `None` for a split node.
    #[inline]
    pub fn leaf_kind(&self) -> Option<LeafKind> {
        self.leaf
    }


    /// Returns the label of the attribute this node splits on.
    #[inline]
    pub fn selected_attribute(&self) -> Option<&str> {
        self.selected_attribute.as_deref()
    }


    /// Returns the value of the parent's attribute that led here.
    #[inline]
    pub fn incoming_edge_value(&self) -> Option<&str> {
        self.incoming_edge_value.as_deref()
    }


    /// Returns the depth. The root has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }


    /// Returns the number of instances per target value.
    #[inline]
    pub fn class_counts(&self) -> &BTreeMap<String, usize> {
        &self.class_counts
    }


    /// Returns the majority class of this node.
    /// Ties are broken by the order of the target values.
    /// An empty leaf reports the majority class of its parent.
    #[inline]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }
}


/// Decides whether a node is terminal.
/// An empty partition is checked first
/// since every class count trivially equals zero.
#[inline]
fn leaf_kind(
    class_counts: &BTreeMap<String, usize>,
    n_instances: usize,
    no_attribute: bool,
) -> Option<LeafKind>
{
    if n_instances == 0 {
        Some(LeafKind::Empty)
    } else if class_counts.values().any(|&c| c == n_instances) {
        Some(LeafKind::Pure)
    } else if no_attribute {
        Some(LeafKind::Exhausted)
    } else {
        None
    }
}


/// Returns the class with the most instances.
/// The first class in sorted order wins a tie.
#[inline]
fn majority(class_counts: &BTreeMap<String, usize>) -> Option<String> {
    class_counts.iter()
        .filter(|(_, c)| **c > 0)
        .fold(None, |best: Option<(&String, usize)>, (class, &c)| {
            match best {
                Some((_, b)) if b >= c => best,
                _ => Some((class, c)),
            }
        })
        .map(|(class, _)| class.clone())
}
