use redb::TypeName;
pub use v1 as latest_document;

pub mod v1;

pub trait DocumentVariant {
    const VERSION: u8;
}

#[derive(Debug, Clone)]
pub enum VersionedDocument {
    V1(v1::Document),
}

impl VersionedDocument {
    pub fn into_latest(self) -> latest_document::Document {
        match self {
            VersionedDocument::V1(document) => document,
        }
    }
}

impl redb::Value for VersionedDocument {
    type SelfType<'a> = VersionedDocument;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty data");
        match *version {
            v1::Document::VERSION => {
                let v1 = postcard::from_bytes::<v1::Document>(data).expect("invalid document");
                VersionedDocument::V1(v1)
            }
            version => panic!("unsupported document version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedDocument::V1(v1) => {
                postcard::to_extend(v1, vec![v1::Document::VERSION]).expect("serialize document")
            }
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("gramdex::Document")
    }
}

#[cfg(test)]
mod tests;
