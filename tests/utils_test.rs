use plexcli::types::Section;
use plexcli::utils::*;
use std::cmp::Ordering;

// Helper function to create a test section
fn create_test_section(key: &str, section_type: &str, title: &str) -> Section {
    Section {
        key: key.to_string(),
        section_type: section_type.to_string(),
        title: title.to_string(),
    }
}

fn keys(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.key.as_str()).collect()
}

#[test]
fn test_sort_sections_by_numeric_key() {
    let mut sections = vec![
        create_test_section("3", "show", "TV Shows"),
        create_test_section("1", "movie", "Movies"),
        create_test_section("2", "artist", "Music"),
    ];

    sort_sections(&mut sections);

    assert_eq!(keys(&sections), vec!["1", "2", "3"]);
}

#[test]
fn test_sort_sections_is_numeric_not_lexicographic() {
    let mut sections = vec![
        create_test_section("10", "show", "Anime"),
        create_test_section("9", "movie", "Documentaries"),
        create_test_section("100", "movie", "Concerts"),
        create_test_section("1", "movie", "Movies"),
    ];

    sort_sections(&mut sections);

    assert_eq!(keys(&sections), vec!["1", "9", "10", "100"]);
}

#[test]
fn test_sort_sections_puts_non_numeric_keys_last() {
    let mut sections = vec![
        create_test_section("b", "show", "B"),
        create_test_section("2", "movie", "Two"),
        create_test_section("a", "show", "A"),
        create_test_section("1", "movie", "One"),
    ];

    sort_sections(&mut sections);

    assert_eq!(keys(&sections), vec!["1", "2", "a", "b"]);
}

#[test]
fn test_sort_sections_is_stable_for_any_input_order() {
    let expected = vec!["1", "2", "3", "4"];
    let orders = [["4", "3", "2", "1"], ["2", "4", "1", "3"], ["1", "2", "3", "4"]];

    for order in orders {
        let mut sections: Vec<Section> = order
            .iter()
            .map(|k| create_test_section(k, "movie", k))
            .collect();
        sort_sections(&mut sections);
        assert_eq!(keys(&sections), expected);
    }
}

#[test]
fn test_compare_section_keys() {
    assert_eq!(compare_section_keys("2", "10"), Ordering::Less);
    assert_eq!(compare_section_keys("10", "2"), Ordering::Greater);
    assert_eq!(compare_section_keys("7", "7"), Ordering::Equal);
    assert_eq!(compare_section_keys("07", "7"), Ordering::Less);
    assert_eq!(compare_section_keys("x", "1"), Ordering::Greater);
}

#[test]
fn test_section_table_rows() {
    let sections = vec![
        create_test_section("1", "movie", "Movies"),
        create_test_section("2", "show", "TV Shows"),
    ];

    let rows = section_table_rows(&sections);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].section_type, "movie");
    assert_eq!(rows[0].title, "Movies");
    assert_eq!(rows[1].id, "2");
    assert_eq!(rows[1].title, "TV Shows");
}

#[test]
fn test_section_table_header() {
    let sections = vec![create_test_section("1", "movie", "Movies")];
    let table = tabled::Table::new(section_table_rows(&sections)).to_string();

    assert!(table.contains("library id"));
    assert!(table.contains("type"));
    assert!(table.contains("title"));
    assert!(table.contains("Movies"));
}

#[test]
fn test_spinner_is_finished_after_clear() {
    let pb = spinner("Fetching libraries...");
    assert_eq!(pb.message(), "Fetching libraries...");
    assert!(!pb.is_finished());

    pb.finish_and_clear();

    assert!(pb.is_finished());
}
