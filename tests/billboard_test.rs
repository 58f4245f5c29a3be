use hot100cli::billboard::extract_titles;

// Minimal chart page with the class signature Billboard uses for song titles
fn chart_fixture(titles: &[&str]) -> String {
    let items: String = titles
        .iter()
        .map(|title| {
            format!(
                r#"<li class="chart-list__element">
                     <span class="chart-element__information__song text--truncate color--primary">{}</span>
                     <span class="chart-element__information__artist text--truncate color--secondary">Some Artist</span>
                   </li>"#,
                title
            )
        })
        .collect();

    format!(
        "<html><body><ol class=\"chart-list__elements\">{}</ol></body></html>",
        items
    )
}

#[test]
fn test_extract_titles_in_document_order() {
    let html = chart_fixture(&["A", "B", "C"]);
    let entries = extract_titles(&html);

    assert_eq!(entries.len(), 3);

    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);

    // Positions are 1-based chart ranks
    let positions: Vec<usize> = entries.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn test_extract_titles_ignores_other_elements() {
    // Artist spans carry a different class signature and must not match
    let html = chart_fixture(&["Only Song"]);
    let entries = extract_titles(&html);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Only Song");
}

#[test]
fn test_extract_titles_requires_full_class_signature() {
    // An element with only part of the class triple is not a title label
    let html = r#"<html><body>
        <span class="chart-element__information__song">Partial One</span>
        <span class="chart-element__information__song text--truncate">Partial Two</span>
    </body></html>"#;

    assert!(extract_titles(html).is_empty());
}

#[test]
fn test_extract_titles_empty_on_changed_markup() {
    // A restructured page yields an empty list rather than an error
    let html = "<html><body><div class=\"o-chart-results-list-row\">New Layout</div></body></html>";
    assert!(extract_titles(html).is_empty());

    assert!(extract_titles("").is_empty());
}

#[test]
fn test_extract_titles_preserves_duplicates_and_annotations() {
    let html = chart_fixture(&[
        "Lucid Dreams",
        "Lucid Dreams",
        "Girls Like You (feat. Cardi B)",
    ]);
    let entries = extract_titles(&html);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, entries[1].title);
    assert_eq!(entries[2].title, "Girls Like You (feat. Cardi B)");
}

#[test]
fn test_extract_titles_trims_whitespace() {
    let html = r#"<html><body>
        <span class="chart-element__information__song text--truncate color--primary">
            Breathin
        </span>
    </body></html>"#;

    let entries = extract_titles(html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Breathin");
}
