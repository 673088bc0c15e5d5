//! Filter predicates and their identity semantics

use anyhow::Result;
use std::rc::Rc;

/// A filter predicate over node values
///
/// Predicates decide leaf visibility: a leaf is shown iff the predicate
/// accepts its value. Branch nodes are never pruned by their own value (see
/// [`FilterTree::set_predicate`](crate::tree::FilterTree::set_predicate)).
///
/// Evaluation is fallible so that a predicate which cannot judge a value
/// (a bad regex, a poisoned lookup table) surfaces the failure to the caller
/// instead of silently hiding data.
pub type Predicate<V> = Rc<dyn Fn(&V) -> Result<bool>>;

/// Wrap an infallible closure as a [`Predicate`]
///
/// This is the common case: plain boolean tests over values.
///
/// ```
/// use filter_tree::predicate;
///
/// let p = predicate(|text: &String| text.contains("app"));
/// assert!(p(&"apple".to_string()).unwrap());
/// assert!(!p(&"banana".to_string()).unwrap());
/// ```
pub fn predicate<V, F>(test: F) -> Predicate<V>
where
    F: Fn(&V) -> bool + 'static,
{
    Rc::new(move |value| Ok(test(value)))
}

/// Wrap a fallible closure as a [`Predicate`]
pub fn try_predicate<V, F>(test: F) -> Predicate<V>
where
    F: Fn(&V) -> Result<bool> + 'static,
{
    Rc::new(test)
}

/// Identity comparison for optional predicates
///
/// Two predicates are the same filter iff they are the same `Rc` allocation
/// (or both absent). This is what makes repeated `set_predicate` calls with
/// the same handle cheap: an identical assignment is skipped entirely.
pub fn predicate_eq<V>(a: &Option<Predicate<V>>, b: &Option<Predicate<V>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}
