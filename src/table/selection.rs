//! Row selection.
//!
//! The selection holds positional identities and is global: it survives page
//! navigation and re-renders. The select-all checkbox, by contrast, only ever
//! speaks for the rows currently on the display surface.

use super::store::TableState;
use std::collections::BTreeSet;

/// Set of selected record identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    identities: BTreeSet<usize>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `identity`, returning whether it is now selected.
    pub fn toggle(&mut self, identity: usize) -> bool {
        if self.identities.remove(&identity) {
            false
        } else {
            self.identities.insert(identity);
            true
        }
    }

    pub fn insert(&mut self, identity: usize) -> bool {
        self.identities.insert(identity)
    }

    pub fn remove(&mut self, identity: usize) -> bool {
        self.identities.remove(&identity)
    }

    #[must_use]
    pub fn contains(&self, identity: usize) -> bool {
        self.identities.contains(&identity)
    }

    pub fn clear(&mut self) {
        self.identities.clear();
    }

    /// Drops identities that no longer point inside a record set of `len`.
    pub fn retain_below(&mut self, len: usize) {
        self.identities.retain(|&identity| identity < len);
    }

    /// Identities from highest to lowest.
    #[must_use]
    pub fn descending(&self) -> Vec<usize> {
        self.identities.iter().rev().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.identities.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl TableState {
    /// Flips selection of one row and recomputes the select-all checkbox.
    ///
    /// The checkbox becomes checked iff every row on the display surface is
    /// selected.
    pub fn toggle(&mut self, identity: usize) -> bool {
        let selected = self.selection_mut().toggle(identity);
        let all_visible = self.sync_select_all();

        tracing::debug!(
            identity = identity,
            selected = selected,
            all_visible_selected = all_visible,
            "row selection toggled"
        );
        selected
    }

    /// Selects or deselects every row on the display surface.
    ///
    /// Rows on other pages keep their selection state. With no rows drawn the
    /// checkbox stays unchecked.
    pub fn select_all(&mut self, flag: bool) {
        let visible: Vec<usize> = self.display().identities().collect();
        let selection = self.selection_mut();
        for identity in &visible {
            if flag {
                selection.insert(*identity);
            } else {
                selection.remove(*identity);
            }
        }
        self.sync_select_all();

        tracing::debug!(
            flag = flag,
            visible_rows = visible.len(),
            selected_total = self.selection().len(),
            "select all applied to visible rows"
        );
    }

    #[must_use]
    pub fn is_selected(&self, identity: usize) -> bool {
        self.selection().contains(identity)
    }

    /// Re-derives the select-all checkbox from the drawn rows and returns it.
    pub(super) fn sync_select_all(&mut self) -> bool {
        let checked = !self.display().rows().is_empty()
            && self
                .display()
                .identities()
                .all(|identity| self.selection().contains(identity));
        self.set_select_all_checked(checked);
        checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut set = SelectionSet::new();
        assert!(set.toggle(3));
        assert!(set.contains(3));
        assert!(!set.toggle(3));
        assert!(set.is_empty());
    }

    #[test]
    fn descending_orders_highest_first() {
        let mut set = SelectionSet::new();
        for i in [4, 11, 2] {
            set.insert(i);
        }
        assert_eq!(set.descending(), vec![11, 4, 2]);
    }

    fn table_of(n: usize) -> TableState {
        let mut table = TableState::new();
        table.load(
            (0..n)
                .map(|i| crate::domain::Record::from_pairs([("id", i.to_string())]))
                .collect(),
        );
        table
    }

    #[test]
    fn checkbox_follows_the_last_toggled_row() {
        let mut table = table_of(25);

        for identity in 0..9 {
            table.toggle(identity);
            assert!(!table.select_all_checked(), "checked after {identity}");
        }
        table.toggle(9);
        assert!(table.select_all_checked());

        table.toggle(4);
        assert!(!table.select_all_checked());
    }

    #[test]
    fn checkbox_tracks_the_page_being_shown() {
        let mut table = table_of(25);
        table.select_all(true);
        assert!(table.select_all_checked());

        table.go_to(crate::table::PageTarget::Page(2));
        assert!(!table.select_all_checked());

        table.go_to(crate::table::PageTarget::First);
        assert!(table.select_all_checked());
    }

    #[test]
    fn checkbox_stays_clear_without_rows() {
        let mut table = table_of(3);
        table.search("no-such-member");

        table.select_all(true);

        assert!(!table.select_all_checked());
    }

    #[test]
    fn retain_below_prunes_out_of_range() {
        let mut set = SelectionSet::new();
        for i in [0, 9, 10, 15] {
            set.insert(i);
        }
        set.retain_below(10);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 9]);
    }
}
