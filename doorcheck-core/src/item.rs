//! Checklist items and the ordered list that owns them

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Unique identifier for a checklist item
///
/// Ids are assigned at creation from the epoch-millisecond clock and bumped
/// past the current maximum when the clock has not advanced, so they stay
/// unique and monotonically distinct within one list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub checked: bool,
}

/// The ordered collection of items
///
/// Order is display order and the only ordering key; there is no separate
/// sort field. Serializes as a bare array of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<Item>,
}

impl Checklist {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The fixed fallback list used when no valid snapshot exists
    pub fn seed() -> Self {
        let entry = |id: u64, text: &str| Item {
            id: ItemId(id),
            text: text.to_string(),
            checked: false,
        };
        Self {
            items: vec![
                entry(1, "Wallet"),
                entry(2, "Phone"),
                entry(3, "Keys"),
                entry(4, "Mask"),
            ],
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn unchecked_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }

    /// Append a new unchecked item, ignoring blank input
    ///
    /// The text is trimmed; if nothing remains, the list is left untouched
    /// and `None` is returned.
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.items.push(Item {
            id,
            text: text.to_string(),
            checked: false,
        });
        Some(id)
    }

    /// Flip the checked flag on the matching item; no-op on unknown ids
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Remove the matching item; no-op on unknown ids
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn check_all(&mut self) {
        for item in &mut self.items {
            item.checked = true;
        }
    }

    pub fn reset_all(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    /// Re-sort items so their order matches `order`
    ///
    /// Ids missing from the sequence keep their prior relative order and
    /// sort after all sequenced ids. Ids in the sequence that are not in
    /// the list are ignored.
    pub fn reorder(&mut self, order: &[ItemId]) {
        self.items
            .sort_by_key(|item| order.iter().position(|&id| id == item.id).unwrap_or(order.len()));
    }

    /// Validity check applied to loaded snapshots: ids unique, no blank text
    pub fn is_valid(&self) -> bool {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .all(|item| !item.text.trim().is_empty() && seen.insert(item.id))
    }

    fn fresh_id(&self) -> ItemId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        let floor = self.items.iter().map(|item| item.id.0).max().unwrap_or(0);
        ItemId(millis.max(floor + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_four_unchecked_items() {
        let list = Checklist::seed();
        assert_eq!(list.len(), 4);
        assert_eq!(list.unchecked_count(), 4);
        assert_eq!(
            list.ids(),
            vec![ItemId(1), ItemId(2), ItemId(3), ItemId(4)]
        );
    }

    #[test]
    fn add_trims_and_appends() {
        let mut list = Checklist::default();
        let id = list.add("  x  ").expect("non-blank text should append");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(id).unwrap().text, "x");
        assert!(!list.get(id).unwrap().checked);
    }

    #[test]
    fn add_blank_is_a_noop() {
        let mut list = Checklist::seed();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn add_assigns_distinct_increasing_ids() {
        let mut list = Checklist::seed();
        let a = list.add("first").unwrap();
        let b = list.add("second").unwrap();
        assert!(a < b);
        assert!(list.is_valid());
    }

    #[test]
    fn toggle_flips_exactly_one_item_and_round_trips() {
        let mut list = Checklist::seed();
        assert!(list.toggle(ItemId(3)));
        assert!(list.get(ItemId(3)).unwrap().checked);
        let checked: Vec<bool> = list.items().iter().map(|i| i.checked).collect();
        assert_eq!(checked, vec![false, false, true, false]);

        assert!(list.toggle(ItemId(3)));
        assert_eq!(list.unchecked_count(), 4);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut list = Checklist::seed();
        assert!(!list.toggle(ItemId(99)));
        assert_eq!(list.unchecked_count(), 4);
    }

    #[test]
    fn remove_drops_the_matching_item_only() {
        let mut list = Checklist::seed();
        assert!(list.remove(ItemId(2)));
        assert_eq!(list.ids(), vec![ItemId(1), ItemId(3), ItemId(4)]);
        assert!(!list.remove(ItemId(2)));
    }

    #[test]
    fn remove_last_item_leaves_empty_list() {
        let mut list = Checklist::default();
        let id = list.add("only").unwrap();
        assert!(list.remove(id));
        assert!(list.is_empty());
        assert_eq!(list.unchecked_count(), 0);
    }

    #[test]
    fn check_all_then_reset_all() {
        let mut list = Checklist::seed();
        list.check_all();
        assert_eq!(list.unchecked_count(), 0);
        list.reset_all();
        assert_eq!(list.unchecked_count(), 4);
    }

    #[test]
    fn reorder_matches_given_sequence() {
        let mut list = Checklist::seed();
        list.reorder(&[ItemId(3), ItemId(1), ItemId(4), ItemId(2)]);
        assert_eq!(
            list.ids(),
            vec![ItemId(3), ItemId(1), ItemId(4), ItemId(2)]
        );
    }

    #[test]
    fn reorder_missing_ids_keep_relative_order_at_the_end() {
        let mut list = Checklist::seed();
        list.reorder(&[ItemId(4), ItemId(2)]);
        assert_eq!(
            list.ids(),
            vec![ItemId(4), ItemId(2), ItemId(1), ItemId(3)]
        );
    }

    #[test]
    fn reorder_ignores_unknown_ids() {
        let mut list = Checklist::seed();
        list.reorder(&[ItemId(2), ItemId(99), ItemId(1), ItemId(3), ItemId(4)]);
        assert_eq!(
            list.ids(),
            vec![ItemId(2), ItemId(1), ItemId(3), ItemId(4)]
        );
    }

    #[test]
    fn validity_rejects_duplicates_and_blank_text() {
        let dup = Checklist::new(vec![
            Item { id: ItemId(1), text: "a".into(), checked: false },
            Item { id: ItemId(1), text: "b".into(), checked: false },
        ]);
        assert!(!dup.is_valid());

        let blank = Checklist::new(vec![Item {
            id: ItemId(1),
            text: "   ".into(),
            checked: false,
        }]);
        assert!(!blank.is_valid());

        assert!(Checklist::seed().is_valid());
    }
}
