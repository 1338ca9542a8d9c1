//! Reading and decoding a list of sources.

use futures_util::stream::{self, StreamExt, TryStreamExt};
use icalendar::Calendar;
use tracing::debug;

use crate::codec;
use crate::error::SourceResult;
use crate::location::Location;
use crate::reader::SourceReader;

/// Reads and decodes one source.
///
/// Decode failures carry the location they came from.
pub async fn load_calendar<R>(reader: &R, location: &Location) -> SourceResult<Calendar>
where
    R: SourceReader + ?Sized,
{
    let text = reader.read(location).await?;
    codec::decode(&text).map_err(|e| e.with_location(location.input()))
}

/// Reads and decodes every location, returning calendars in argument order.
///
/// Up to `concurrency` sources are in flight at once; results are still
/// consumed in order. The first failure is returned and the remaining
/// reads are dropped.
pub async fn load_calendars<R>(
    reader: &R,
    locations: &[Location],
    concurrency: usize,
) -> SourceResult<Vec<Calendar>>
where
    R: SourceReader + ?Sized,
{
    let calendars: Vec<Calendar> = stream::iter(locations)
        .map(|location| load_calendar(reader, location))
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    debug!(sources = calendars.len(), "Loaded all sources");
    Ok(calendars)
}
