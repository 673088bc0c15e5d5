//! Indented text rendering of the tree

use crate::element::Element;
use filter_tree::{FilterTree, NodeId};

/// Render the filtered view, one node per line, two-space indents
pub fn render_visible(tree: &FilterTree<Element>) -> String {
    render(tree, true)
}

/// Render the full, unfiltered tree
pub fn render_all(tree: &FilterTree<Element>) -> String {
    render(tree, false)
}

fn render(tree: &FilterTree<Element>, filtered: bool) -> String {
    let mut lines = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(tree.root(), 0)];
    while let Some((id, depth)) = stack.pop() {
        let label = tree.value(id).map(Element::text).unwrap_or("?");
        lines.push(format!("{}{}", "  ".repeat(depth), label));
        let children = if filtered {
            tree.visible_children(id)
        } else {
            tree.children(id)
        };
        for &child in children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::text_query;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> FilterTree<Element> {
        let mut tree = FilterTree::new(Element::new("Root"));
        let fruit = tree.add_child(tree.root(), Element::new("Fruit")).unwrap();
        tree.add_child(fruit, Element::new("Apple")).unwrap();
        tree.add_child(fruit, Element::new("Banana")).unwrap();
        tree.add_child(tree.root(), Element::new("Hammer")).unwrap();
        tree
    }

    #[test]
    fn test_render_unfiltered() {
        let tree = sample_tree();
        assert_eq!(
            render_visible(&tree),
            "Root\n  Fruit\n    Apple\n    Banana\n  Hammer"
        );
        assert_eq!(render_all(&tree), render_visible(&tree));
    }

    #[test]
    fn test_render_filtered_view() {
        let mut tree = sample_tree();
        tree.set_predicate(tree.root(), text_query("App")).unwrap();

        insta::assert_snapshot!(render_visible(&tree), @r###"
        Root
          Fruit
            Apple
        "###);

        // The unfiltered rendering is unaffected
        insta::assert_snapshot!(render_all(&tree), @r###"
        Root
          Fruit
            Apple
            Banana
          Hammer
        "###);
    }

    #[test]
    fn test_render_after_clearing_filter() {
        let mut tree = sample_tree();
        tree.set_predicate(tree.root(), text_query("App")).unwrap();
        tree.set_predicate(tree.root(), text_query("")).unwrap();
        assert_eq!(render_visible(&tree), render_all(&tree));
    }
}
