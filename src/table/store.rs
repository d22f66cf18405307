//! Table state and the full re-render.
//!
//! Records live in a slot arena. Both the record set and the filtered view are
//! ordered lists of slot ids, so the same record object can be reachable from
//! both: an edit made through the record set shows up in the filtered view,
//! and a record removed from the record set may still sit in the filtered view
//! until the view is next rebuilt. Slots reachable from neither list are freed
//! whenever a list is rebuilt.
//!
//! A record's *identity* is its position in the filtered view at render time.
//! Mutations use that same number to index the record set, which only lines
//! up when no filter is active.

use super::display::{DisplayRow, DisplaySurface};
use super::pagination::{clamp_page, page_range, total_pages, PageWindow};
use super::selection::SelectionSet;
use crate::domain::Record;
use std::collections::{BTreeMap, HashSet};

type SlotId = u64;

/// Complete state of the admin table.
///
/// # Examples
///
/// ```
/// use admintable::domain::Record;
/// use admintable::table::TableState;
///
/// let mut table = TableState::new();
/// table.load((0..25).map(|i| Record::from_pairs([("id", i.to_string())])).collect());
///
/// assert_eq!(table.len(), 25);
/// assert_eq!(table.page_window().total_pages, 3);
/// assert_eq!(table.display().rows().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct TableState {
    slots: BTreeMap<SlotId, Record>,
    next_slot: SlotId,
    record_set: Vec<SlotId>,
    filtered: Vec<SlotId>,
    current_page: usize,
    selection: SelectionSet,
    select_all_checked: bool,
    display: DisplaySurface,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_slot: 0,
            record_set: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            selection: SelectionSet::new(),
            select_all_checked: false,
            display: DisplaySurface::new(),
        }
    }

    /// Replaces the record set with `records`, shows all of them and renders
    /// page 1. Any previous selection is discarded.
    pub fn load(&mut self, records: Vec<Record>) {
        let _span = tracing::info_span!("table_load", records = records.len()).entered();

        self.slots.clear();
        let record_set: Vec<SlotId> = records
            .into_iter()
            .map(|record| self.allocate(record))
            .collect();
        self.record_set = record_set;
        self.filtered = self.record_set.clone();
        self.current_page = 1;
        self.selection.clear();
        self.select_all_checked = false;
        self.render();

        tracing::info!(
            records = self.record_set.len(),
            total_pages = self.page_window().total_pages,
            "record set loaded"
        );
    }

    /// Number of records in the record set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.record_set.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_set.is_empty()
    }

    /// Number of records in the filtered view.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Record at `identity` in the record set.
    #[must_use]
    pub fn record(&self, identity: usize) -> Option<&Record> {
        self.record_set
            .get(identity)
            .and_then(|slot| self.slots.get(slot))
    }

    /// Records of the record set, in order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.record_set
            .iter()
            .filter_map(move |slot| self.slots.get(slot))
    }

    /// Records of the filtered view, in order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered
            .iter()
            .filter_map(move |slot| self.slots.get(slot))
    }

    /// Field names of the first record in the record set.
    ///
    /// Edits walk these names, whatever fields the edited record has.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.record(0)
            .map(|record| {
                record
                    .field_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn page_window(&self) -> PageWindow {
        PageWindow {
            current_page: self.current_page,
            total_pages: self.total_pages(),
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len())
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// State of the select-all checkbox.
    #[must_use]
    pub const fn select_all_checked(&self) -> bool {
        self.select_all_checked
    }

    #[must_use]
    pub const fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub(super) fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub(super) fn display_mut(&mut self) -> &mut DisplaySurface {
        &mut self.display
    }

    pub(super) fn set_select_all_checked(&mut self, checked: bool) {
        self.select_all_checked = checked;
    }

    pub(super) fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub(super) fn record_set_mut(&mut self) -> &mut Vec<SlotId> {
        &mut self.record_set
    }

    pub(super) fn slot_at(&self, identity: usize) -> Option<SlotId> {
        self.record_set.get(identity).copied()
    }

    pub(super) fn record_by_slot_mut(&mut self, slot: SlotId) -> Option<&mut Record> {
        self.slots.get_mut(&slot)
    }

    pub(super) fn record_set_slots(&self) -> &[SlotId] {
        &self.record_set
    }

    pub(super) fn slot_record(&self, slot: SlotId) -> Option<&Record> {
        self.slots.get(&slot)
    }

    /// Replaces the filtered view and frees unreachable slots.
    pub(super) fn set_filtered(&mut self, filtered: Vec<SlotId>) {
        self.filtered = filtered;
        self.collect_garbage();
    }

    /// Filtered view becomes a copy of the record set.
    pub(super) fn reset_filter(&mut self) {
        self.set_filtered(self.record_set.clone());
    }

    pub(super) fn collect_garbage(&mut self) {
        let live: HashSet<SlotId> = self
            .record_set
            .iter()
            .chain(self.filtered.iter())
            .copied()
            .collect();
        self.slots.retain(|slot, _| live.contains(slot));
    }

    /// Redraws the display surface from the current page of the filtered view.
    ///
    /// Installs the header from the first filtered record if no header has
    /// been drawn yet, and re-derives the select-all checkbox for the new
    /// rows.
    pub(super) fn render(&mut self) {
        let total = total_pages(self.filtered.len());
        self.current_page = clamp_page(self.current_page, total);

        if self.display.header().is_none() {
            if let Some(first) = self.filtered.first().and_then(|slot| self.slots.get(slot)) {
                let fields: Vec<String> =
                    first.field_names().into_iter().map(str::to_string).collect();
                self.display.install_header_once(fields);
            }
        }

        let range = page_range(self.current_page, self.filtered.len());
        let start = range.start;
        let rows = self.filtered[range]
            .iter()
            .enumerate()
            .filter_map(|(offset, slot)| {
                self.slots.get(slot).map(|record| DisplayRow {
                    identity: start + offset,
                    cells: record.cells(),
                })
            })
            .collect();
        self.display.replace_rows(rows);
        self.sync_select_all();

        tracing::trace!(
            page = self.current_page,
            total_pages = total,
            rows = self.display.rows().len(),
            "table rendered"
        );
    }

    fn allocate(&mut self, record: Record) -> SlotId {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.slots.insert(slot, record);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::from_pairs([("id", i.to_string()), ("name", format!("m{i}"))]))
            .collect()
    }

    #[test]
    fn load_renders_first_page_with_sequential_identities() {
        let mut table = TableState::new();
        table.load(members(25));

        let identities: Vec<usize> = table.display().identities().collect();
        assert_eq!(identities, (0..10).collect::<Vec<_>>());
        assert_eq!(table.page_window().current_page, 1);
        assert_eq!(table.display().render_count(), 1);
    }

    #[test]
    fn load_of_empty_dataset_has_no_header() {
        let mut table = TableState::new();
        table.load(Vec::new());

        assert!(table.display().header().is_none());
        assert!(table.display().rows().is_empty());
        assert_eq!(table.page_window().total_pages, 0);
        assert_eq!(table.page_window().current_page, 1);
    }

    #[test]
    fn reload_keeps_first_header() {
        let mut table = TableState::new();
        table.load(members(3));
        table.load(vec![Record::from_pairs([("email", "a@b.c")])]);

        let fields = table.display().field_columns().map(<[String]>::to_vec);
        assert_eq!(fields, Some(vec!["id".to_string(), "name".to_string()]));
    }

    #[test]
    fn field_names_follow_first_record() {
        let mut table = TableState::new();
        table.load(vec![
            Record::from_pairs([("id", "1"), ("name", "a")]),
            Record::from_pairs([("id", "2"), ("role", "admin")]),
        ]);

        assert_eq!(table.field_names(), vec!["id", "name"]);
    }

    #[test]
    fn reload_frees_old_slots() {
        let mut table = TableState::new();
        table.load(members(5));
        table.load(members(2));

        assert_eq!(table.slots.len(), 2);
    }
}
