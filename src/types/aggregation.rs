//! Defines the server-side bucketing granularity applied to raw readings.

use crate::types::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// Granularity the backend aggregates readings to before returning them.
///
/// [`Aggregation::Raw`] is the empty selection: no `aggregation` parameter is
/// sent and every individual reading comes back.
///
/// # Examples
///
/// ```
/// use tempcheck::Aggregation;
///
/// assert_eq!(Aggregation::Day.to_string(), "day");
/// assert_eq!("".parse::<Aggregation>().unwrap(), Aggregation::Raw);
/// assert_eq!(Aggregation::Raw.query_value(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Aggregation {
    /// No aggregation; the backend returns individual readings.
    #[default]
    Raw,
    /// One reading per sensor type per day.
    Day,
}

impl Aggregation {
    /// Every selectable aggregation, in the order a selector lists them.
    pub const ALL: [Aggregation; 2] = [Aggregation::Raw, Aggregation::Day];

    /// The form value of this selection (`""` for [`Aggregation::Raw`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Raw => "",
            Aggregation::Day => "day",
        }
    }

    /// The value of the `aggregation` query parameter, or `None` when the
    /// parameter must be left out.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Aggregation::Raw => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Aggregation::Raw),
            "day" => Ok(Aggregation::Day),
            other => Err(QueryError::UnknownAggregation(other.to_string())),
        }
    }
}
