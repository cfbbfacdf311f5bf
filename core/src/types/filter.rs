use crate::types::FieldName;

/// Equality filter on a property.
///
/// For a multi-valued property the filter matches when `value` is any one of
/// the property's values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Filter {
    pub property: FieldName,
    pub value: String,
}

impl Filter {
    pub fn eq(property: FieldName, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}
