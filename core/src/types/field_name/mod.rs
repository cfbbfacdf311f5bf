use nutype::nutype;

pub const MAX_FIELD_NAME_LENGTH: usize = 64;

/// Name of a document property.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_FIELD_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FieldName(String);

#[cfg(test)]
mod tests;
