//! Sample roster used by `gramdex seed`.

use gramdex_core::types::{FieldName, FieldNameError};
use gramdex_search::Record;

const ROSTER: [(&str, &str, &str); 8] = [
    ("田中", "太郎", "tanaka@sample.com"),
    ("田所", "三郎", "tadokoro@sample.com"),
    ("鈴木", "一郎", "i-suzuki@sample.com"),
    ("鈴木", "次郎", "j-tanaka@sample.com"),
    ("山田", "花子", "h-yamada@sample.com"),
    ("山田", "太郎", "t-yamada@sample.com"),
    ("メロン", "太郎", "meron@sample.com"),
    ("ロンメロ", "太郎", "ronmero@sample.com"),
];

pub fn roster() -> Result<Vec<Record>, FieldNameError> {
    let family_name = FieldName::try_from("family_name")?;
    let given_name = FieldName::try_from("given_name")?;
    let email = FieldName::try_from("email")?;

    Ok(ROSTER
        .iter()
        .map(|(family, given, mail)| {
            Record::new()
                .with(family_name.clone(), *family)
                .with(given_name.clone(), *given)
                .with(email.clone(), *mail)
        })
        .collect())
}
