//! Edits and deletions.
//!
//! All four operations address records by positional identity and index the
//! record set with it. Deleting one row patches the display surface and
//! leaves the filtered view alone; the two bulk deletions rebuild the filtered
//! view from the record set, which drops any active search.

use super::pagination::{page_bounds, total_pages};
use super::store::TableState;
use crate::domain::{AdminTableError, FieldValue, Result};

impl TableState {
    /// Writes `new_value` into `field` of the record at `identity`.
    ///
    /// `None` is a cancelled prompt and leaves everything untouched. The
    /// drawn cell of the edited row is updated in place; there is no
    /// re-render.
    ///
    /// # Errors
    ///
    /// Returns [`AdminTableError::StaleIdentity`] when a value is supplied and
    /// `identity` is past the end of the record set.
    ///
    /// # Examples
    ///
    /// ```
    /// use admintable::domain::Record;
    /// use admintable::table::TableState;
    ///
    /// let mut table = TableState::new();
    /// table.load(vec![Record::from_pairs([("id", "1"), ("name", "old")])]);
    ///
    /// table.edit_field(0, "name", Some("new".to_string())).unwrap();
    /// table.edit_field(0, "id", None).unwrap();
    ///
    /// assert_eq!(table.display().rows()[0].cells, vec!["1", "new"]);
    /// ```
    pub fn edit_field(
        &mut self,
        identity: usize,
        field: &str,
        new_value: Option<String>,
    ) -> Result<()> {
        let Some(value) = new_value else {
            tracing::debug!(identity = identity, field = field, "edit cancelled");
            return Ok(());
        };

        let len = self.len();
        let slot = self
            .slot_at(identity)
            .ok_or(AdminTableError::StaleIdentity { identity, len })?;

        let column = self.field_names().iter().position(|name| name == field);
        if let Some(record) = self.record_by_slot_mut(slot) {
            record.set(field, FieldValue::Text(value.clone()));
        }
        if let Some(column) = column {
            self.display_mut().update_cell(identity, column, value);
        }

        tracing::debug!(identity = identity, field = field, "field edited");
        Ok(())
    }

    /// Deletes the record at `identity` and removes its drawn row.
    ///
    /// Nothing is re-rendered: the other drawn rows keep their identities
    /// and the filtered view still holds the removed record. Selections that
    /// now point past the end of the record set are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AdminTableError::StaleIdentity`] when `identity` is past the
    /// end of the record set. The drawn row is removed regardless.
    pub fn delete_one(&mut self, identity: usize) -> Result<()> {
        let _span = tracing::debug_span!("table_delete_one", identity = identity).entered();

        let row_removed = self.display_mut().remove_row(identity);
        let len = self.len();
        if identity >= len {
            self.sync_select_all();
            return Err(AdminTableError::StaleIdentity { identity, len });
        }

        self.record_set_mut().remove(identity);
        let remaining = self.len();
        self.selection_mut().retain_below(remaining);
        self.sync_select_all();

        tracing::info!(
            identity = identity,
            row_removed = row_removed,
            remaining = remaining,
            "record deleted"
        );
        Ok(())
    }

    /// Deletes every selected record, clears the selection, drops any active
    /// search and renders page 1.
    ///
    /// Identities are removed from highest to lowest so that each removal
    /// leaves the lower ones in place. Identities past the end of the record
    /// set are skipped.
    pub fn delete_selected(&mut self) {
        let _span = tracing::debug_span!(
            "table_delete_selected",
            selected = self.selection().len()
        )
        .entered();

        let mut removed = 0usize;
        for identity in self.selection().descending() {
            if identity < self.len() {
                self.record_set_mut().remove(identity);
                removed += 1;
            } else {
                tracing::warn!(identity = identity, len = self.len(), "skipping stale selection");
            }
        }

        self.selection_mut().clear();
        self.reset_filter();
        self.set_current_page(1);
        self.render();

        tracing::info!(removed = removed, remaining = self.len(), "selected records deleted");
    }

    /// Deletes the record-set positions covered by the current page.
    ///
    /// The page's range is applied to the record set, not to the filtered
    /// view, and any active search is dropped afterwards. The current page is
    /// kept when it still exists and otherwise moves to the new last page.
    pub fn bulk_delete_current_page(&mut self) {
        let page = self.page_window().current_page;
        let bounds = page_bounds(page);
        let _span = tracing::debug_span!(
            "table_bulk_delete",
            page = page,
            start = bounds.start,
            end = bounds.end
        )
        .entered();

        let before = self.len();
        let kept: Vec<_> = std::mem::take(self.record_set_mut())
            .into_iter()
            .enumerate()
            .filter(|(position, _)| !bounds.contains(position))
            .map(|(_, slot)| slot)
            .collect();
        *self.record_set_mut() = kept;

        let remaining = self.len();
        self.selection_mut().retain_below(remaining);
        self.reset_filter();
        self.set_current_page(page.min(total_pages(remaining)).max(1));
        self.render();

        tracing::info!(
            removed = before - remaining,
            remaining = remaining,
            page = self.page_window().current_page,
            "page bulk deleted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::table::PageTarget;

    fn members(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::from_pairs([("id", i.to_string()), ("name", format!("m{i}"))]))
            .collect()
    }

    fn ids(table: &TableState) -> Vec<String> {
        table
            .records()
            .filter_map(|r| r.get("id").map(ToString::to_string))
            .collect()
    }

    #[test]
    fn edit_is_visible_through_filtered_view() {
        let mut table = TableState::new();
        table.load(members(3));

        table.edit_field(1, "name", Some("renamed".into())).unwrap();

        let name = table
            .filtered_records()
            .nth(1)
            .and_then(|r| r.get("name"))
            .map(ToString::to_string);
        assert_eq!(name.as_deref(), Some("renamed"));
        assert_eq!(table.display().rows()[1].cells[1], "renamed");
    }

    #[test]
    fn edit_of_stale_identity_fails() {
        let mut table = TableState::new();
        table.load(members(2));

        let err = table.edit_field(5, "name", Some("x".into())).unwrap_err();

        assert!(matches!(err, AdminTableError::StaleIdentity { identity: 5, len: 2 }));
    }

    #[test]
    fn cancelled_edit_of_stale_identity_is_a_no_op() {
        let mut table = TableState::new();
        table.load(members(2));

        assert!(table.edit_field(5, "name", None).is_ok());
    }

    #[test]
    fn delete_one_does_not_rerender() {
        let mut table = TableState::new();
        table.load(members(12));
        let renders = table.display().render_count();

        table.delete_one(3).unwrap();

        assert_eq!(table.len(), 11);
        assert_eq!(table.filtered_len(), 12);
        assert_eq!(table.display().render_count(), renders);
        let identities: Vec<usize> = table.display().identities().collect();
        assert_eq!(identities, vec![0, 1, 2, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn delete_one_prunes_selection_past_end() {
        let mut table = TableState::new();
        table.load(members(3));
        table.toggle(2);

        table.delete_one(0).unwrap();

        assert!(table.selection().is_empty());
    }

    #[test]
    fn delete_selected_removes_descending_and_resets() {
        let mut table = TableState::new();
        table.load(members(25));
        table.go_to(PageTarget::Page(2));
        table.toggle(10);
        table.toggle(12);
        table.toggle(0);
        table.search("m1");

        table.delete_selected();

        assert_eq!(table.len(), 22);
        assert!(!ids(&table).iter().any(|id| id == "0" || id == "10" || id == "12"));
        assert!(table.selection().is_empty());
        assert_eq!(table.filtered_len(), 22);
        assert_eq!(table.page_window().current_page, 1);
    }

    #[test]
    fn bulk_delete_uses_record_set_range() {
        let mut table = TableState::new();
        table.load(members(25));
        table.go_to(PageTarget::Page(2));

        table.bulk_delete_current_page();

        assert_eq!(table.len(), 15);
        let remaining = ids(&table);
        assert!(remaining.iter().all(|id| {
            let id: usize = id.parse().unwrap();
            !(10..20).contains(&id)
        }));
        assert_eq!(table.page_window().current_page, 2);
    }

    #[test]
    fn bulk_delete_of_only_page_lands_on_page_one() {
        let mut table = TableState::new();
        table.load(members(4));

        table.bulk_delete_current_page();

        assert!(table.is_empty());
        assert_eq!(table.page_window().current_page, 1);
        assert!(table.display().rows().is_empty());
    }

    #[test]
    fn bulk_delete_keeps_in_range_selection() {
        let mut table = TableState::new();
        table.load(members(25));
        table.toggle(1);
        table.go_to(PageTarget::Page(3));

        table.bulk_delete_current_page();

        assert_eq!(table.len(), 20);
        assert!(table.is_selected(1));
    }

    #[test]
    fn deleting_the_only_unselected_row_checks_select_all() {
        let mut table = TableState::new();
        table.load(members(5));
        for identity in 0..4 {
            table.toggle(identity);
        }
        assert!(!table.select_all_checked());

        table.delete_one(4).unwrap();

        assert!(table.select_all_checked());
    }
}
