use std::fmt::{Display, Formatter};
use std::io::Read;

use ordered_float::OrderedFloat;
use serde::Deserialize;

use crate::number::to_number;

/// Raw row of the state names table, as read from disk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateRow {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Numeric state id. Malformed ids are NaN and still usable as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(OrderedFloat<f64>);

impl StateId {
    pub fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_nan(&self) -> bool {
        self.value().is_nan()
    }
}

impl From<f64> for StateId {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.value();
        if value.is_finite() && value.fract() == 0.0 {
            write!(f, "{value:.0}")
        } else {
            write!(f, "{value}")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateRecord {
    pub id: StateId,
    pub name: String,
    pub code: String,
}

/// Normalizes a raw row: numeric id, trimmed name, trimmed upper-case code
pub fn parse_state_name(row: &StateRow) -> StateRecord {
    StateRecord {
        id: StateId::new(to_number(&row.id)),
        name: row.name.trim().to_string(),
        code: row.code.trim().to_uppercase(),
    }
}

/// Reads a tab separated state names table with an `id`, `name` and `code` header
pub fn read_state_names<R: Read>(reader: R) -> Result<Vec<StateRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(reader);
    reader
        .deserialize::<StateRow>()
        .map(|row| row.map(|row| parse_state_name(&row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, code: &str) -> StateRow {
        StateRow {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn test_parse_state_name() {
        let record = parse_state_name(&row("12", " Ohio ", " oh "));
        assert_eq!(
            record,
            StateRecord {
                id: StateId::new(12.0),
                name: "Ohio".to_string(),
                code: "OH".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_id_is_nan() {
        let record = parse_state_name(&row("twelve", "Ohio", "oh"));
        assert!(record.id.is_nan());
        assert_eq!(record.id.to_string(), "NaN");
        assert_eq!(record.code, "OH");
    }

    #[test]
    fn test_state_id_display() {
        assert_eq!(StateId::new(6.0).to_string(), "6");
        assert_eq!(StateId::new(6.5).to_string(), "6.5");
        assert_eq!(StateId::new(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn test_read_state_names() {
        let tsv = "id\tname\tcode\n1\tAlabama\tal\n2\t Alaska \t AK\n";
        let records = read_state_names(tsv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, StateId::new(2.0));
        assert_eq!(records[1].name, "Alaska");
        assert_eq!(records[0].code, "AL");
    }

    #[test]
    fn test_read_state_names_missing_column() {
        let tsv = "id\tname\n1\tAlabama\n";
        assert!(read_state_names(tsv.as_bytes()).is_err());
    }
}
