use super::*;

fn name(s: &str) -> FieldName {
    FieldName::try_from(s).unwrap()
}

#[test]
fn text_reads_single_valued_property() {
    let document = Document::new()
        .with(Property::text(name("email"), "tanaka@sample.com").noindex())
        .with(Property::multiple(name("search"), vec!["ab".to_string()]));

    assert_eq!(document.text("email"), Some("tanaka@sample.com"));
    assert_eq!(document.text("search"), None);
    assert_eq!(document.text("missing"), None);
}

#[test]
fn index_entries_skip_unindexed_properties() {
    let document = Document::new()
        .with(Property::text(name("email"), "tanaka@sample.com").noindex())
        .with(Property::text(name("kind"), "person"));

    let entries = document.index_entries();
    assert_eq!(entries.len(), 1);
    assert!(entries.contains(&(&name("kind"), "person")));
}

#[test]
fn index_entries_collapse_duplicate_values() {
    let document = Document::new().with(Property::multiple(
        name("search"),
        vec!["* ロン".to_string(), "f ロン".to_string(), "* ロン".to_string()],
    ));

    let entries = document.index_entries();
    assert_eq!(entries.len(), 2);
}
