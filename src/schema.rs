//! Declared layout of the externally owned climate tables. Nothing here creates or alters them.

use serde::Serialize;
use serde_json::Number;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, ValueRef};

pub mod measurement {
    pub const TABLE: &str = "measurement";
    pub const ID: &str = "id";
    pub const STATION: &str = "station";
    /// ISO 8601 `YYYY-MM-DD` text; compared lexicographically by SQLite.
    pub const DATE: &str = "date";
    pub const PRCP: &str = "prcp";
    pub const TOBS: &str = "tobs";
}

pub mod station {
    pub const TABLE: &str = "station";
    pub const STATION: &str = "station";
    pub const NAME: &str = "name";
}

/// A numeric reading as stored. INTEGER values stay integers, REAL values stay floats.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Reading(pub Number);

impl From<i64> for Reading {
    fn from(n: i64) -> Self {
        Reading(Number::from(n))
    }
}

impl TryFrom<f64> for Reading {
    type Error = BoxDynError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Number::from_f64(f)
            .map(Reading)
            .ok_or_else(|| format!("non-finite reading: {}", f).into())
    }
}

impl Type<Sqlite> for Reading {
    fn type_info() -> SqliteTypeInfo {
        <f64 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <f64 as Type<Sqlite>>::compatible(ty) || <i64 as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for Reading {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let is_integer = <i64 as Type<Sqlite>>::compatible(&value.type_info());
        if is_integer {
            Ok(Reading::from(<i64 as Decode<Sqlite>>::decode(value)?))
        } else {
            Reading::try_from(<f64 as Decode<Sqlite>>::decode(value)?)
        }
    }
}

/// One dated reading from a station.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    pub date: String,
    pub prcp: Option<Reading>,
    pub tobs: Reading,
}
