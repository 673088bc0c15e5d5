use anyhow::Result;
use filter_tree::{predicate, FilterTree, NodeId};

fn print_subtree(tree: &FilterTree<String>, id: NodeId, depth: usize) {
    let name = tree.value(id).map(String::as_str).unwrap_or("?");
    println!("{}{}", "  ".repeat(depth), name);
    for &child in tree.visible_children(id) {
        print_subtree(tree, child, depth + 1);
    }
}

fn main() -> Result<()> {
    // Build a small inventory tree
    let mut tree = FilterTree::new("inventory".to_string());
    let fruit = tree.add_child(tree.root(), "fruit".to_string())?;
    tree.add_child(fruit, "apple".to_string())?;
    tree.add_child(fruit, "banana".to_string())?;
    tree.add_child(fruit, "pineapple".to_string())?;
    let tools = tree.add_child(tree.root(), "tools".to_string())?;
    tree.add_child(tools, "hammer".to_string())?;
    tree.add_child(tools, "sandpaper".to_string())?;

    println!("Unfiltered:");
    print_subtree(&tree, tree.root(), 0);

    // Filter live: only leaves containing "ap" survive; branches stay as
    // long as they have any children at all
    tree.set_predicate(
        tree.root(),
        Some(predicate(|v: &String| v.contains("ap"))),
    )?;

    println!();
    println!("Filtered for \"ap\":");
    print_subtree(&tree, tree.root(), 0);

    // Clearing the filter restores the full view
    tree.set_predicate(tree.root(), None)?;

    println!();
    println!("Filter cleared:");
    print_subtree(&tree, tree.root(), 0);

    Ok(())
}
