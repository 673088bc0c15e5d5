use filter_tree::{predicate, FilterTree, NodeId};
use proptest::prelude::*;
use proptest::sample::Index;

/// True if `sub` occurs in `full` in the same relative order
fn is_subsequence(sub: &[NodeId], full: &[NodeId]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|id| id == wanted))
}

/// Build a random tree: node `i + 1` hangs under one of the nodes created
/// before it
fn build_tree(parents: &[Index]) -> (FilterTree<u32>, Vec<NodeId>) {
    let mut tree = FilterTree::new(0u32);
    let mut ids = vec![tree.root()];
    for (i, pick) in parents.iter().enumerate() {
        let parent = ids[pick.index(ids.len())];
        let id = tree.add_child(parent, (i + 1) as u32).unwrap();
        ids.push(id);
    }
    (tree, ids)
}

proptest! {
    #[test]
    fn visible_is_always_an_ordered_subsequence(
        parents in proptest::collection::vec(any::<Index>(), 1..32)
    ) {
        let (mut tree, ids) = build_tree(&parents);
        tree.set_predicate(tree.root(), Some(predicate(|v: &u32| v % 2 == 0))).unwrap();

        for &id in &ids {
            let children = tree.children(id);
            let visible = tree.visible_children(id);
            prop_assert!(
                is_subsequence(visible, children),
                "visible view of {} is not an ordered subsequence",
                id
            );
        }
    }

    #[test]
    fn visibility_rule_holds_at_every_node(
        parents in proptest::collection::vec(any::<Index>(), 1..32),
        threshold in 0u32..32
    ) {
        let (mut tree, ids) = build_tree(&parents);
        tree.set_predicate(
            tree.root(),
            Some(predicate(move |v: &u32| *v >= threshold)),
        ).unwrap();

        for &id in &ids {
            let expected: Vec<NodeId> = tree
                .children(id)
                .iter()
                .copied()
                .filter(|&child| {
                    // Branches always pass; leaves consult the predicate
                    !tree.children(child).is_empty()
                        || *tree.value(child).unwrap() >= threshold
                })
                .collect();
            prop_assert_eq!(tree.visible_children(id), &expected[..]);
        }
    }

    #[test]
    fn clearing_the_filter_restores_every_view(
        parents in proptest::collection::vec(any::<Index>(), 1..32)
    ) {
        let (mut tree, ids) = build_tree(&parents);
        tree.set_predicate(tree.root(), Some(predicate(|v: &u32| *v % 3 == 0))).unwrap();
        tree.set_predicate(tree.root(), None).unwrap();

        for &id in &ids {
            prop_assert_eq!(tree.visible_children(id), tree.children(id));
        }
    }

    #[test]
    fn repeated_assignment_changes_nothing(
        parents in proptest::collection::vec(any::<Index>(), 1..24)
    ) {
        let (mut tree, ids) = build_tree(&parents);
        let filter = predicate(|v: &u32| *v % 2 == 1);

        tree.set_predicate(tree.root(), Some(filter.clone())).unwrap();
        let before: Vec<Vec<NodeId>> = ids
            .iter()
            .map(|&id| tree.visible_children(id).to_vec())
            .collect();

        tree.set_predicate(tree.root(), Some(filter)).unwrap();
        for (&id, expected) in ids.iter().zip(&before) {
            prop_assert_eq!(tree.visible_children(id), &expected[..]);
        }
    }
}
