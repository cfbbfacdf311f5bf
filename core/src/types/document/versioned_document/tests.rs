use super::*;
use crate::types::FieldName;

fn name(s: &str) -> FieldName {
    FieldName::try_from(s).unwrap()
}

#[test]
fn document_v1_serialization() {
    let original = v1::Document {
        properties: vec![
            v1::Property {
                name: name("family_name"),
                value: v1::PropertyValue::Text("田中".to_string()),
                indexed: false,
            },
            v1::Property {
                name: name("search"),
                value: v1::PropertyValue::Multiple(vec![
                    "* 田中".to_string(),
                    "f 田中".to_string(),
                ]),
                indexed: true,
            },
        ],
    };

    let versioned = VersionedDocument::V1(original.clone());
    let bytes = <VersionedDocument as redb::Value>::as_bytes(&versioned);
    assert_eq!(bytes[0], v1::Document::VERSION);

    let decoded = <VersionedDocument as redb::Value>::from_bytes(&bytes);
    assert_eq!(decoded.into_latest(), original);
}

#[test]
#[should_panic(expected = "unsupported document version")]
fn document_rejects_unknown_version() {
    let _ = <VersionedDocument as redb::Value>::from_bytes(&[0xFF, 0x00]);
}
