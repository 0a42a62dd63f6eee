//! A collection of utility functions
use std::future::Future;
use std::time::SystemTime;

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use tokio::task::JoinHandle;

use crate::errors::Error;

/// Runs every task concurrently and collects their results in input order.
///
/// All tasks are started before the first one is awaited, so many operations
/// can be in flight at once; slot `i` of the output always corresponds to
/// task `i` of the input regardless of completion order. The first task that
/// fails makes the whole call fail (tasks after it are left to finish in the
/// background, their results discarded).
pub async fn fan_out<I, Fut, T>(tasks: I) -> Result<Vec<T>, Error>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, Error>> + Send + 'static,
    T: Send + 'static,
{
    // collect() launches every task before the loop below awaits any.
    let handles: Vec<JoinHandle<Result<T, Error>>> =
        tasks.into_iter().map(tokio::spawn).collect();
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle.await.map_err(|e| Error::Task { how: e.to_string() })??;
        results.push(result);
    }
    Ok(results)
}

/// Formats a `SystemTime` into a RFC 3339 - Z format.
/// For example "2018-01-26T18:30:09.453Z"
pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Builds a `SystemTime` from a RFC 3339 - Z formatted string.
/// For example "2018-01-26T18:30:09.453Z"
pub fn parse_system_time(s: &str) -> Result<SystemTime, Error> {
    let datetime = DateTime::parse_from_rfc3339(s).map_err(|e| Error::Parse {
        what: "system time".into(),
        how: e.to_string(),
    })?;
    Ok(SystemTime::from(datetime))
}

/// Formats a `SystemTime` in local time as "YYYY/MM/DD hh:mm:ss:SSS".
/// For example "2018/01/27 03:30:09:453"
pub fn format_timestamp(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y/%m/%d %H:%M:%S:%3f").to_string()
}
