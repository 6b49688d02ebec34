mod query;
mod root;

pub use query::*;
pub use root::*;

use time::{Date, OffsetDateTime};

/// Meal plan days are stored as the unix timestamp of their UTC midnight.
pub fn day_timestamp(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

pub fn day_from_timestamp(timestamp: i64) -> kondate_shared::Result<Date> {
    let datetime = OffsetDateTime::from_unix_timestamp(timestamp)
        .map_err(|err| kondate_shared::Error::Unknown(err.into()))?;

    Ok(datetime.date())
}
