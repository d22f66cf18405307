use admintable::domain::{FieldValue, Record};
use admintable::table::{PageTarget, TableState, ACTIONS_COLUMN, SELECT_COLUMN};

fn member(i: usize) -> Record {
    Record::from_pairs([
        ("id", FieldValue::from(i.to_string())),
        ("name", FieldValue::from(format!("Member {i}"))),
        ("email", FieldValue::from(format!("member{i}@mailinator.com"))),
        ("role", FieldValue::from(if i % 5 == 0 { "admin" } else { "member" })),
    ])
}

fn table_of(n: usize) -> TableState {
    let mut table = TableState::new();
    table.load((1..=n).map(member).collect());
    table
}

fn drawn_ids(table: &TableState) -> Vec<String> {
    table
        .display()
        .rows()
        .iter()
        .map(|row| row.cells[0].clone())
        .collect()
}

#[test]
fn last_page_then_bulk_delete_moves_back_one_page() {
    let mut table = table_of(25);
    assert_eq!(table.total_pages(), 3);

    table.go_to(PageTarget::Page(3));
    assert_eq!(drawn_ids(&table), vec!["21", "22", "23", "24", "25"]);
    let identities: Vec<usize> = table.display().identities().collect();
    assert_eq!(identities, vec![20, 21, 22, 23, 24]);

    table.bulk_delete_current_page();

    assert_eq!(table.len(), 20);
    assert_eq!(table.current_page(), 2);
    assert_eq!(table.display().rows().len(), 10);
    assert_eq!(drawn_ids(&table)[0], "11");
}

#[test]
fn bulk_delete_in_the_middle_keeps_the_page() {
    let mut table = table_of(25);
    table.go_to(PageTarget::Page(2));

    table.bulk_delete_current_page();

    assert_eq!(table.len(), 15);
    assert_eq!(table.current_page(), 2);
    assert_eq!(drawn_ids(&table), vec!["21", "22", "23", "24", "25"]);
}

#[test]
fn search_without_matches_draws_nothing_and_navigation_is_inert() {
    let mut table = table_of(25);

    table.search("nobody-has-this");

    assert_eq!(table.filtered_len(), 0);
    assert_eq!(table.total_pages(), 0);
    assert!(table.display().rows().is_empty());
    assert!(table
        .page_controls()
        .iter()
        .all(|control| !matches!(control.target, PageTarget::Page(_))));

    for target in [PageTarget::Next, PageTarget::Last, PageTarget::Previous, PageTarget::First] {
        table.go_to(target);
        assert_eq!(table.current_page(), 1);
        assert!(table.display().rows().is_empty());
    }
}

#[test]
fn search_is_case_insensitive_across_fields_and_not_cumulative() {
    let mut table = table_of(25);

    table.search("ADMIN");
    assert_eq!(table.filtered_len(), 5);

    table.search("member 2");
    let ids: Vec<String> = table
        .filtered_records()
        .map(|record| record.cells()[0].clone())
        .collect();
    assert_eq!(ids, vec!["2", "20", "21", "22", "23", "24", "25"]);
}

#[test]
fn search_resets_to_first_page() {
    let mut table = table_of(25);
    table.go_to(PageTarget::Last);

    table.search("member");

    assert_eq!(table.current_page(), 1);
}

#[test]
fn cancelled_field_is_left_untouched() {
    let mut table = table_of(3);

    table.edit_field(1, "id", None).unwrap();
    table
        .edit_field(1, "name", Some("Renamed".to_string()))
        .unwrap();
    table.edit_field(1, "email", None).unwrap();
    table.edit_field(1, "role", None).unwrap();

    let record = table.record(1).unwrap();
    assert_eq!(record.get("name"), Some(&FieldValue::from("Renamed")));
    assert_eq!(
        record.get("email"),
        Some(&FieldValue::from("member2@mailinator.com"))
    );
    assert_eq!(table.display().rows()[1].cells[1], "Renamed");
}

#[test]
fn edits_are_seen_through_the_filtered_view() {
    let mut table = table_of(12);
    table.search("member1");

    let identity = table.display().rows()[0].identity;
    table
        .edit_field(identity, "role", Some("owner".to_string()))
        .unwrap();

    assert_eq!(
        table.record(identity).and_then(|r| r.get("role")).cloned(),
        Some(FieldValue::from("owner"))
    );
}

#[test]
fn delete_selected_clears_selection_and_returns_to_page_one() {
    let mut table = table_of(25);
    table.go_to(PageTarget::Page(2));
    table.select_all(true);
    table.toggle(3);

    table.delete_selected();

    assert!(table.selection().is_empty());
    assert!(!table.select_all_checked());
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.len(), 14);
    assert_eq!(table.total_pages(), 2);
    assert!(!drawn_ids(&table).contains(&"4".to_string()));
}

#[test]
fn delete_one_removes_row_without_redrawing() {
    let mut table = table_of(12);
    let renders = table.display().render_count();

    table.delete_one(2).unwrap();

    assert_eq!(table.len(), 11);
    assert_eq!(table.display().render_count(), renders);
    assert_eq!(table.display().rows().len(), 9);
    assert!(table.display().row_with_identity(2).is_none());
    assert_eq!(table.filtered_len(), 12);
}

#[test]
fn header_is_drawn_once_with_selection_and_actions_columns() {
    let mut table = TableState::new();
    table.load(vec![]);
    assert!(table.display().header().is_none());

    table.load((1..=3).map(member).collect());
    let header = table.display().header().unwrap().to_vec();
    assert_eq!(header.first().map(String::as_str), Some(SELECT_COLUMN));
    assert_eq!(header.last().map(String::as_str), Some(ACTIONS_COLUMN));
    assert_eq!(
        table.display().field_columns().unwrap(),
        ["id", "name", "email", "role"]
    );

    table.load(vec![Record::from_pairs([("other", "x")])]);
    assert_eq!(table.display().header().unwrap(), header.as_slice());
}
