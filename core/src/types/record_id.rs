use nutype::nutype;
use redb::TypeName;
use std::cmp::Ordering;

/// Store-assigned identity of a document. Zero is never a valid id.
#[nutype(
    new_unchecked,
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        FromStr,
        TryFrom,
        Into,
        Serialize,
        Deserialize,
    )
)]
pub struct RecordId(u64);

impl RecordId {
    /// The lowest id, handed out first.
    pub fn first() -> Self {
        // SAFETY: 1 satisfies `greater = 0`.
        unsafe { Self::new_unchecked(1) }
    }

    /// The highest id.
    pub fn last() -> Self {
        // SAFETY: u64::MAX satisfies `greater = 0`.
        unsafe { Self::new_unchecked(u64::MAX) }
    }
}

impl redb::Key for RecordId {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        // Big-endian bytes sort in numeric order.
        data1.cmp(data2)
    }
}

impl redb::Value for RecordId {
    type SelfType<'a> = RecordId;
    type AsBytes<'a> = [u8; 8];

    fn fixed_width() -> Option<usize> {
        Some(8)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let bytes: [u8; 8] = data.try_into().expect("record id must be 8 bytes");
        Self::try_new(u64::from_be_bytes(bytes)).expect("zero record id in database")
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        value.into_inner().to_be_bytes()
    }

    fn type_name() -> TypeName {
        TypeName::new("gramdex::RecordId")
    }
}
