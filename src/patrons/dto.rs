use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::domain::model::Patron;

// PatronRecord is a member entry as found in the catalog JSON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PatronRecord {
    pub id: String,
    pub name: String,
}

impl Identifiable for PatronRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl From<&PatronRecord> for Patron {
    fn from(other: &PatronRecord) -> Patron {
        Patron::new(other.id.as_str(), other.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::model::Patron;
    use crate::patrons::dto::PatronRecord;

    #[test]
    fn test_should_parse_patron_record() {
        let record: PatronRecord = serde_json::from_str(r#"{"Id": "123", "Name": "John"}"#).expect("parse record");
        let patron = Patron::from(&record);
        assert_eq!("123", patron.patron_id());
        assert_eq!("John", patron.name());
        assert_eq!(0.0, patron.fine_amount());
    }
}
