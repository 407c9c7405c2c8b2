//! Renders an [`Id3Tree`] as indented text.
use colored::{Color, Colorize};

use std::fmt;

use crate::constants::PRINT_INDENT_WIDTH;
use super::node::NodeId;
use super::tree::{Id3Tree, format_counts};


/// Prints one line per node in depth-first order:
/// the incoming edge, the split attribute or the leaf class,
/// the number of instances,
/// and, for leaves, the number of instances per target value.
/// Lines are indented by depth.
///
/// ```text
/// [root] -> split on Outlook | 14 instances
///     Outlook = Overcast -> leaf (pure): Yes | 4 instances | No: 0, Yes: 4
/// ```
pub struct TreePrinter<'a> {
    tree: &'a Id3Tree,
    colored: bool,
    indent: usize,
}


impl<'a> TreePrinter<'a> {
    /// Construct a plain-text printer for `tree`.
    pub fn new(tree: &'a Id3Tree) -> Self {
        Self { tree, colored: false, indent: PRINT_INDENT_WIDTH, }
    }


    /// Set whether to emit ANSI colors. Default is `false`.
    pub fn colored(mut self, flag: bool) -> Self {
        self.colored = flag;
        self
    }


    /// Set the number of spaces per depth level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }


    #[inline]
    fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }


    /// Returns the line describing `id`, without indentation.
    pub fn line(&self, id: NodeId) -> String {
        let node = &self.tree[id];

        let edge = match self.tree.edge_label(id) {
            Some(label) => label,
            None => "[root]".to_string(),
        };
        let edge = self.paint(&edge, Color::Yellow);

        let n = node.n_instances();
        let unit = if n == 1 { "instance" } else { "instances" };

        match node.leaf_kind() {
            Some(kind) => {
                let class = self.paint(node.class().unwrap_or("-"), Color::Green);
                let counts = format_counts(node.class_counts());
                format!(
                    "{edge} -> leaf ({kind}): {class} | {n} {unit} | {counts}"
                )
            },
            None => {
                let attribute = node.selected_attribute()
                    .expect("A split node has a selected attribute");
                let attribute = self.paint(attribute, Color::Blue);
                format!("{edge} -> split on {attribute} | {n} {unit}")
            },
        }
    }
}


impl fmt::Display for TreePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.tree.preorder();
        let last = order.len().saturating_sub(1);
        for (k, id) in order.into_iter().enumerate() {
            let width = self.tree[id].depth() * self.indent;
            write!(f, "{:width$}{}", "", self.line(id))?;
            if k < last { writeln!(f)?; }
        }
        Ok(())
    }
}
