use super::*;

#[test]
fn field_name_normal_usage() {
    let name = FieldName::try_from("family_name").unwrap();
    assert_eq!(name.as_str(), "family_name");
}

#[test]
fn field_name_is_trimmed() {
    let name = FieldName::try_from("  email ").unwrap();
    assert_eq!(name.as_str(), "email");
}

#[test]
fn field_name_rejects_empty_string() {
    FieldName::try_from("").unwrap_err();
}

#[test]
fn field_name_rejects_whitespace_string() {
    FieldName::try_from("   ").unwrap_err();
}

#[test]
fn field_name_rejects_too_long_string() {
    let long_name = "f".repeat(MAX_FIELD_NAME_LENGTH + 1);
    FieldName::try_from(long_name.as_str()).unwrap_err();
}

#[test]
fn field_name_length_counts_code_points() {
    let name = "名".repeat(MAX_FIELD_NAME_LENGTH);
    FieldName::try_from(name.as_str()).unwrap();
}
