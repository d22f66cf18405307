//! Case-insensitive substring search over the record set.

use super::store::TableState;
use crate::domain::Record;

/// Whether any value of `record` contains `lowered_term`.
///
/// `lowered_term` must already be lowercased. An empty term matches every
/// record.
///
/// # Examples
///
/// ```
/// use admintable::domain::Record;
/// use admintable::table::matches;
///
/// let record = Record::from_pairs([("name", "Aaron Miles"), ("role", "member")]);
/// assert!(matches(&record, "aaron"));
/// assert!(matches(&record, "mem"));
/// assert!(!matches(&record, "admin"));
/// ```
#[must_use]
pub fn matches(record: &Record, lowered_term: &str) -> bool {
    lowered_term.is_empty()
        || record
            .values()
            .any(|value| value.to_string().to_lowercase().contains(lowered_term))
}

impl TableState {
    /// Rebuilds the filtered view from the records matching `term` and goes
    /// back to page 1.
    ///
    /// The term is matched case-insensitively as a substring of each value's
    /// text. Leading and trailing whitespace is significant.
    pub fn search(&mut self, term: &str) {
        let _span = tracing::debug_span!("table_search", term_len = term.len()).entered();

        let lowered = term.to_lowercase();
        let filtered: Vec<_> = self
            .record_set_slots()
            .iter()
            .copied()
            .filter(|&slot| {
                self.slot_record(slot)
                    .is_some_and(|record| matches(record, &lowered))
            })
            .collect();

        tracing::debug!(
            matched = filtered.len(),
            searched = self.len(),
            "search applied"
        );

        self.set_filtered(filtered);
        self.set_current_page(1);
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    fn sample() -> Vec<Record> {
        vec![
            Record::from_pairs([("id", "1"), ("name", "Aaron Miles"), ("role", "member")]),
            Record::from_pairs([("id", "2"), ("name", "Aishwarya Naik"), ("role", "admin")]),
            Record::from_pairs([("id", "3"), ("name", "Arvind Kumar"), ("role", "admin")]),
        ]
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut table = TableState::new();
        table.load(sample());

        table.search("ADMIN");

        assert_eq!(table.filtered_len(), 2);
        assert_eq!(table.page_window().current_page, 1);
    }

    #[test]
    fn whitespace_is_significant() {
        let mut table = TableState::new();
        table.load(sample());

        table.search(" miles");
        assert_eq!(table.filtered_len(), 1);

        table.search("miles ");
        assert_eq!(table.filtered_len(), 0);
    }

    #[test]
    fn numbers_match_on_their_text() {
        let record = Record::from_pairs([("age", FieldValue::from(42))]);
        assert!(matches(&record, "4"));
    }

    #[test]
    fn zero_matches_empties_display_but_keeps_header() {
        let mut table = TableState::new();
        table.load(sample());

        table.search("zzz");

        assert!(table.display().rows().is_empty());
        assert!(table.display().header().is_some());
        assert_eq!(table.page_window().total_pages, 0);
        assert_eq!(table.page_window().current_page, 1);
    }

    #[test]
    fn empty_term_restores_everything() {
        let mut table = TableState::new();
        table.load(sample());
        table.search("arvind");

        table.search("");

        assert_eq!(table.filtered_len(), 3);
    }
}
