//! Defines the tree produced by [`Id3`](super::Id3).
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::ops::Index;
use std::path::Path;

use crate::attribute::TargetAttribute;
use crate::error::Result;
use super::node::*;
use super::printer::TreePrinter;


/// An induced decision tree.
/// Every node lives in one arena and is addressed by [`NodeId`];
/// the root is the first node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Id3Tree {
    target: TargetAttribute,
    nodes: Vec<TreeNode>,
}


impl Id3Tree {
    #[inline]
    pub(super) fn new(target: TargetAttribute, root: TreeNode) -> Self {
        Self { target, nodes: vec![root] }
    }


    /// Append `node` to the arena and link it to its parent.
    pub(super) fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(node);
        id
    }


    #[inline]
    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }


    /// Returns the id of the root.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }


    /// Returns the node `id`, or `None` if it is not in this tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }


    /// Returns the target the tree classifies.
    #[inline]
    pub fn target(&self) -> &TargetAttribute {
        &self.target
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }


    /// Always `false`; a tree has a root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }


    /// Returns the children of `id`.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> {
        self[id].children
            .iter()
            .map(move |&child| &self[child])
    }


    /// Returns the parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<&TreeNode> {
        self[id].parent.map(|p| &self[p])
    }


    /// Returns the ids from the root down to `id`.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self[current].parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }


    /// Returns the node ids in depth-first pre-order.
    /// Siblings are visited in the order of the split values.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self[id].children.iter().rev());
        }
        order
    }


    /// Returns the leaves in depth-first pre-order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.preorder()
            .into_iter()
            .filter(|&id| self[id].is_leaf())
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter()
            .filter(|node| node.is_leaf())
            .count()
    }


    /// Returns the depth of the deepest node.
    pub fn depth(&self) -> usize {
        self.nodes.iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }


    /// Returns a printer that renders this tree as indented text.
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }


    /// Returns the edge label `attribute = value` leading to `id`.
    pub fn edge_label(&self, id: NodeId) -> Option<String> {
        let node = &self[id];
        let parent = self.parent(id)?;
        let attribute = parent.selected_attribute()?;
        let value = node.incoming_edge_value()?;
        Some(format!("{attribute} = {value}"))
    }


    /// Returns the tree in the Graphviz DOT language.
    /// Labels are quoted with `\` and `"` escaped.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph ID3 {\n");
        for id in self.preorder() {
            let node = &self[id];
            let info = match node.selected_attribute() {
                Some(attribute) => format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                    attribute = dot_escape(attribute),
                ),
                None => format!(
                    "\tnode_{id} [ label = \"{class}\\n{counts}\", shape = box ];\n",
                    class = dot_escape(node.class().unwrap_or("-")),
                    counts = dot_escape(&format_counts(node.class_counts())),
                ),
            };
            dot.push_str(&info);

            if let (Some(parent), Some(value)) = (node.parent(), node.incoming_edge_value()) {
                let edge = format!(
                    "\tnode_{parent} -- node_{id} [ label = \"{value}\" ];\n",
                    value = dot_escape(value),
                );
                dot.push_str(&edge);
            }
        }
        dot.push('}');
        dot
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }


    /// Returns the tree as nested JSON.
    /// Each object holds the edge value, the split attribute or
    /// leaf kind, the instance count, the class counts,
    /// and the children.
    pub fn to_json(&self) -> Result<String> {
        let root = JsonNode::new(self, self.root());
        let json = serde_json::to_string_pretty(&JsonTree {
            target: self.target.label(),
            root,
        })?;
        Ok(json)
    }
}


impl Index<NodeId> for Id3Tree {
    type Output = TreeNode;
    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}


impl fmt::Display for Id3Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.printer())
    }
}


/// Formats class counts as `a: 1, b: 0`.
pub(super) fn format_counts(counts: &BTreeMap<String, usize>) -> String {
    counts.iter()
        .map(|(class, n)| format!("{class}: {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}


/// Escapes `s` for a double-quoted DOT string.
fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
}


#[derive(Serialize)]
struct JsonTree<'a> {
    target: &'a str,
    root: JsonNode<'a>,
}


#[derive(Serialize)]
struct JsonNode<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    leaf: Option<LeafKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<&'a str>,
    instances: usize,
    class_counts: &'a BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode<'a>>,
}


impl<'a> JsonNode<'a> {
    fn new(tree: &'a Id3Tree, id: NodeId) -> Self {
        let node = &tree[id];
        let children = node.children()
            .iter()
            .map(|&child| Self::new(tree, child))
            .collect();
        Self {
            value: node.incoming_edge_value(),
            attribute: node.selected_attribute(),
            leaf: node.leaf_kind(),
            class: node.class(),
            instances: node.n_instances(),
            class_counts: node.class_counts(),
            children,
        }
    }
}
