//! Dual-list association editor
//!
//! Splits a candidate set ("universe") into `available` and `selected` and moves
//! items between the two on user clicks. Every identifier of the universe is in
//! exactly one of the two lists at all times.
//!
//! ## Usage
//!
//! ```ignore
//! let mut list = DualList::initialize(all_categories, product.categories.clone());
//! list.add(&category);
//! let ids = list.to_identifier_list();
//! ```

pub mod component;
pub mod traits;

pub use component::DualListEditor;
pub use traits::{ListItem, Priced};

use std::collections::HashSet;

/// Partition of a universe into `available` and `selected`
#[derive(Clone, Debug, PartialEq)]
pub struct DualList<T> {
    available: Vec<T>,
    selected: Vec<T>,
}

impl<T> Default for DualList<T> {
    fn default() -> Self {
        Self {
            available: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl<T: ListItem + Clone> DualList<T> {
    /// Build the partition from the universe and the existing associations.
    ///
    /// Preselected items missing from the universe stay selected. Repeated
    /// identifiers keep their first occurrence.
    pub fn initialize(universe: Vec<T>, preselected: Vec<T>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let selected: Vec<T> = preselected
            .into_iter()
            .filter(|item| seen.insert(item.id().to_string()))
            .collect();

        let available: Vec<T> = universe
            .into_iter()
            .filter(|item| seen.insert(item.id().to_string()))
            .collect();

        Self {
            available,
            selected,
        }
    }

    /// Move `item` from `available` to the end of `selected`.
    ///
    /// Returns `false` and changes nothing when the item is not available.
    pub fn add(&mut self, item: &T) -> bool {
        move_by_id(&mut self.available, &mut self.selected, item.id())
    }

    /// Move `item` from `selected` back to the end of `available`.
    ///
    /// Returns `false` and changes nothing when the item is not selected.
    pub fn remove(&mut self, item: &T) -> bool {
        move_by_id(&mut self.selected, &mut self.available, item.id())
    }

    /// Identifiers of the selected items in the order they were picked
    pub fn to_identifier_list(&self) -> Vec<String> {
        self.selected.iter().map(|item| item.id().to_string()).collect()
    }
}

impl<T> DualList<T> {
    pub fn available(&self) -> &[T] {
        &self.available
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.available.len() + self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Priced> DualList<T> {
    /// Sum of the prices of the selected items.
    ///
    /// Recomputed from `selected` on every call, in whole cents.
    pub fn running_total(&self) -> f64 {
        let cents: i64 = self
            .selected
            .iter()
            .map(|item| (item.price() * 100.0).round() as i64)
            .sum();
        cents as f64 / 100.0
    }
}

fn move_by_id<T: ListItem>(from: &mut Vec<T>, to: &mut Vec<T>, id: &str) -> bool {
    match from.iter().position(|item| item.id() == id) {
        Some(pos) => {
            let item = from.remove(pos);
            to.push(item);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: &'static str,
        price: f64,
    }

    impl ListItem for Item {
        fn id(&self) -> &str {
            self.id
        }

        fn label(&self) -> String {
            self.id.to_uppercase()
        }
    }

    impl Priced for Item {
        fn price(&self) -> f64 {
            self.price
        }
    }

    fn item(id: &'static str) -> Item {
        Item { id, price: 0.0 }
    }

    fn priced(id: &'static str, price: f64) -> Item {
        Item { id, price }
    }

    fn ids(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    fn assert_partition(list: &DualList<Item>, universe: &[&str]) {
        for id in universe {
            let in_available = list.available().iter().filter(|i| i.id == *id).count();
            let in_selected = list.selected().iter().filter(|i| i.id == *id).count();
            assert_eq!(in_available + in_selected, 1, "id {id} must be in exactly one list");
        }
        assert_eq!(list.len(), universe.len());
    }

    #[test]
    fn test_initialize_splits_universe() {
        let list = DualList::initialize(vec![item("a"), item("b"), item("c")], vec![item("b")]);
        assert_eq!(ids(list.available()), vec!["a", "c"]);
        assert_eq!(ids(list.selected()), vec!["b"]);
    }

    #[test]
    fn test_initialize_keeps_unknown_preselected() {
        let list = DualList::initialize(vec![item("a"), item("b")], vec![item("z"), item("a")]);
        assert_eq!(ids(list.selected()), vec!["z", "a"]);
        assert_eq!(ids(list.available()), vec!["b"]);
    }

    #[test]
    fn test_initialize_drops_duplicate_ids() {
        let list = DualList::initialize(
            vec![item("a"), item("a"), item("b")],
            vec![item("b"), item("b")],
        );
        assert_eq!(ids(list.available()), vec!["a"]);
        assert_eq!(ids(list.selected()), vec!["b"]);
    }

    #[test]
    fn test_add_twice_selects_once() {
        let mut list = DualList::initialize(vec![item("a"), item("b")], Vec::new());
        assert!(list.add(&item("a")));
        assert!(!list.add(&item("a")));
        assert_eq!(ids(list.selected()), vec!["a"]);
        assert_eq!(ids(list.available()), vec!["b"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut list = DualList::initialize(vec![item("a")], Vec::new());
        let before = list.clone();
        assert!(!list.remove(&item("a")));
        assert!(!list.remove(&item("x")));
        assert_eq!(list, before);
    }

    #[test]
    fn test_moves_append_at_end() {
        let mut list = DualList::initialize(vec![item("a"), item("b"), item("c")], Vec::new());
        list.add(&item("c"));
        list.add(&item("a"));
        assert_eq!(list.to_identifier_list(), vec!["c".to_string(), "a".to_string()]);

        list.remove(&item("c"));
        assert_eq!(ids(list.available()), vec!["b", "c"]);
    }

    #[test]
    fn test_partition_invariant_over_operation_sequence() {
        let universe = ["a", "b", "c", "d"];
        let mut list = DualList::initialize(
            universe.iter().map(|id| item(id)).collect(),
            vec![item("c")],
        );

        // (add?, id) pairs, including repeats and moves of items on the wrong side
        let ops = [
            (true, "a"),
            (true, "a"),
            (false, "b"),
            (true, "d"),
            (false, "c"),
            (false, "c"),
            (true, "c"),
            (false, "a"),
            (true, "b"),
            (false, "d"),
            (true, "a"),
        ];
        for (add, id) in ops {
            if add {
                list.add(&item(id));
            } else {
                list.remove(&item(id));
            }
            assert_partition(&list, &universe);
        }
        assert_eq!(list.to_identifier_list(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_running_total_follows_selection() {
        let p50 = priced("p50", 50.0);
        let p30 = priced("p30", 30.0);
        let mut list = DualList::initialize(vec![p50.clone(), p30.clone()], Vec::new());
        assert_eq!(list.running_total(), 0.0);

        list.add(&p50);
        list.add(&p30);
        assert_eq!(list.running_total(), 80.0);

        list.remove(&p30);
        assert_eq!(list.running_total(), 50.0);
    }

    #[test]
    fn test_running_total_has_no_float_drift() {
        let mut list = DualList::initialize(
            vec![priced("a", 0.1), priced("b", 0.2), priced("c", 19.99)],
            Vec::new(),
        );
        list.add(&priced("a", 0.1));
        list.add(&priced("b", 0.2));
        assert_eq!(list.running_total(), 0.3);

        list.add(&priced("c", 19.99));
        list.remove(&priced("a", 0.1));
        assert_eq!(list.running_total(), 20.19);
    }
}
