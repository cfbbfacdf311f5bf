use serde::{Deserialize, Serialize};

use super::DocumentVariant;
use crate::types::FieldName;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub properties: Vec<Property>,
}

impl DocumentVariant for Document {
    const VERSION: u8 = 1;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: FieldName,
    pub value: PropertyValue,
    pub indexed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    Text(String),
    Multiple(Vec<String>),
}
