use std::io::Read;

use indexmap::IndexMap;

use crate::error::LoadError;
use crate::number::to_number;

/// One row of the symbol dataset: a position plus arbitrary named fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub fields: IndexMap<String, String>,
}

impl ValueRecord {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.insert(name.into(), value.to_string());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Numeric value of a field; missing fields are NaN
    pub fn number(&self, name: &str) -> f64 {
        self.field(name).map(to_number).unwrap_or(f64::NAN)
    }

    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Reads a comma separated dataset with `longitude` and `latitude` columns.
///
/// Every other column is kept as a text field of the record.
pub fn read_values<R: Read>(reader: R) -> Result<Vec<ValueRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let longitude = column("longitude")?;
    let latitude = column("latitude")?;

    let mut values = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = ValueRecord::new(
            to_number(row.get(longitude).unwrap_or_default()),
            to_number(row.get(latitude).unwrap_or_default()),
        );
        for (index, (header, value)) in headers.iter().zip(row.iter()).enumerate() {
            if index != longitude && index != latitude {
                record.fields.insert(header.trim().to_string(), value.to_string());
            }
        }
        values.push(record);
    }
    Ok(values)
}
