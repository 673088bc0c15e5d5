use anyhow::Result;
use filter_tree::{predicate, FilterTree};

fn main() -> Result<()> {
    let mut tree = FilterTree::new("inventory".to_string());
    let fruit = tree.add_child(tree.root(), "fruit".to_string())?;

    // A display layer would use these deltas to splice rows in and out of
    // a rendered tree instead of re-rendering from scratch
    tree.subscribe(fruit, |delta| {
        println!(
            "fruit changed: {} added, {} removed",
            delta.added.len(),
            delta.removed.len()
        );
    })?;

    println!("adding apple and banana...");
    tree.add_child(fruit, "apple".to_string())?;
    tree.add_child(fruit, "banana".to_string())?;

    println!("filtering for \"app\"...");
    tree.set_predicate(
        tree.root(),
        Some(predicate(|v: &String| v.contains("app"))),
    )?;

    println!("clearing the filter...");
    tree.set_predicate(tree.root(), None)?;

    Ok(())
}
