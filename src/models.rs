use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// Text form of [`Person::born`] in the samples file.
pub const BORN_FORMAT: &str = "%d/%m/%Y";

/// One synthetic record. Field order is the key order in the samples file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub city: String,
    #[serde(serialize_with = "serialize_born")]
    pub born: NaiveDate,
    pub height: f64,
    pub weight: f64,
}

fn serialize_born<S: Serializer>(born: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&born.format(BORN_FORMAT))
}

impl Person {
    pub fn new(
        id: u64,
        name: &str,
        age: u32,
        city: &str,
        born: NaiveDate,
        height: f64,
        weight: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            city: city.to_string(),
            born,
            height,
            weight,
        }
    }

    /// Builds a person from element `index` of the samples array.
    pub fn from_json(index: usize, value: &Value) -> Result<Self, RecordError> {
        let record = value
            .as_object()
            .ok_or(RecordError::NotAnObject { index })?;
        let fields = Fields { index, record };

        let id = fields.u64("id")?;
        let name = fields.str("name")?;
        let age = u32::try_from(fields.u64("age")?)
            .map_err(|_| fields.invalid("age", "an integer within u32"))?;
        let city = fields.str("city")?;
        let born = fields.str("born")?;
        let born = NaiveDate::parse_from_str(born, BORN_FORMAT).map_err(|source| {
            RecordError::InvalidDate {
                index,
                value: born.to_string(),
                source,
            }
        })?;

        Ok(Self::new(
            id,
            name,
            age,
            city,
            born,
            fields.f64("height")?,
            fields.f64("weight")?,
        ))
    }
}

struct Fields<'a> {
    index: usize,
    record: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn get(&self, field: &'static str) -> Result<&'a Value, RecordError> {
        self.record.get(field).ok_or(RecordError::MissingField {
            index: self.index,
            field,
        })
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> RecordError {
        RecordError::InvalidField {
            index: self.index,
            field,
            expected,
        }
    }

    fn str(&self, field: &'static str) -> Result<&'a str, RecordError> {
        self.get(field)?
            .as_str()
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    /// Accepts `20` and `20.0`, rejects fractions and negatives.
    fn u64(&self, field: &'static str) -> Result<u64, RecordError> {
        let value = self.get(field)?;
        value
            .as_u64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|n| n.fract() == 0.0 && (0.0..u64::MAX as f64).contains(n))
                    .map(|n| n as u64)
            })
            .ok_or_else(|| self.invalid(field, "a non-negative integer"))
    }

    fn f64(&self, field: &'static str) -> Result<f64, RecordError> {
        self.get(field)?
            .as_f64()
            .ok_or_else(|| self.invalid(field, "a number"))
    }
}
