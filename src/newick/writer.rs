//! Canonical Newick text rendering of a [Tree].

use crate::model::Tree;
use std::fmt::{self, Write};

/// Returns the canonical Newick text of a tree.
///
/// Leaves are written as their name, internal vertices as `(`, the text of
/// each child joined by `,`, then `)`. An internal vertex without children
/// is `()`. The output contains no whitespace, no branch lengths and no
/// closing semicolon.
///
/// # Example
/// ```
/// use newick_tree::Tree;
/// use newick_tree::newick::to_newick;
///
/// let tree = Tree::node(vec![Tree::leaf("Kiwi"), Tree::node(vec![]), Tree::leaf("Moa")]);
/// assert_eq!(to_newick(&tree), "(Kiwi,(),Moa)");
/// ```
pub fn to_newick(tree: &Tree) -> String {
    let mut newick = String::with_capacity(newick_len(tree));
    // Writing into a String cannot fail
    let _ = write_newick(tree, &mut newick);
    newick
}

/// Writes the canonical Newick text of a tree into `out`.
///
/// Same format as [to_newick]; used by the `Display` impl of [Tree].
pub fn write_newick<W: Write + ?Sized>(tree: &Tree, out: &mut W) -> fmt::Result {
    match tree {
        Tree::Leaf { name } => out.write_str(name),
        Tree::Node { children } => {
            out.write_char('(')?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_newick(child, out)?;
            }
            out.write_char(')')
        }
    }
}

/// Computes the exact length in bytes of the Newick text of a tree,
/// used to pre-allocate the output string.
fn newick_len(tree: &Tree) -> usize {
    match tree {
        Tree::Leaf { name } => name.len(),
        Tree::Node { children } => {
            // "(" + ")" + one "," between each pair of children
            let separators = 2 + children.len().saturating_sub(1);
            separators + children.iter().map(newick_len).sum::<usize>()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        assert_eq!(to_newick(&Tree::leaf("A")), "A");
    }

    #[test]
    fn test_empty_node() {
        assert_eq!(to_newick(&Tree::node(vec![])), "()");
    }

    #[test]
    fn test_single_child() {
        assert_eq!(to_newick(&Tree::node(vec![Tree::leaf("A")])), "(A)");
    }

    #[test]
    fn test_len_is_exact() {
        let trees = [
            Tree::leaf("Pukeko"),
            Tree::node(vec![]),
            Tree::node(vec![Tree::leaf("A"), Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")])]),
            Tree::node(vec![Tree::node(vec![]), Tree::node(vec![Tree::node(vec![])])]),
        ];
        for tree in &trees {
            assert_eq!(newick_len(tree), to_newick(tree).len());
        }
    }
}
