//! Shared fixtures for the unit tests: a scripted in-memory sensor source and
//! a log capture.

use crate::api::error::FetchError;
use crate::api::request::ReadingsQuery;
use crate::api::source::SensorSource;
use crate::types::location::Location;
use crate::types::reading::RawReading;
use crate::types::summary::Summary;
use async_trait::async_trait;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Mutex, Once};

/// A `FetchError` that needs no network.
pub(crate) fn parse_failure() -> FetchError {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    FetchError::JsonParse {
        url: "fake://sensors".to_string(),
        source,
    }
}

/// A scripted answer; `Fail` turns into [`parse_failure`].
pub(crate) enum Reply<T> {
    Data(T),
    Fail,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Locations,
    Summary(String),
    Readings(ReadingsQuery),
}

/// Answers every endpoint from a queue of scripted replies. An exhausted queue
/// answers with the empty value.
#[derive(Default)]
pub(crate) struct FakeSource {
    locations: Mutex<VecDeque<Reply<Vec<Location>>>>,
    summaries: Mutex<VecDeque<Reply<Option<Summary>>>>,
    readings: Mutex<VecDeque<Reply<Vec<RawReading>>>>,
    calls: Mutex<Vec<Call>>,
}

fn next_reply<T: Default>(queue: &Mutex<VecDeque<Reply<T>>>) -> Result<T, FetchError> {
    match queue.lock().unwrap().pop_front() {
        Some(Reply::Data(value)) => Ok(value),
        Some(Reply::Fail) => Err(parse_failure()),
        None => Ok(T::default()),
    }
}

impl FakeSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_locations(self, reply: Reply<Vec<Location>>) -> Self {
        self.locations.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn with_summary(self, reply: Reply<Option<Summary>>) -> Self {
        self.summaries.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn with_readings(self, reply: Reply<Vec<RawReading>>) -> Self {
        self.readings.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn readings_calls(&self) -> Vec<ReadingsQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Readings(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn summary_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Summary(sid) => Some(sid),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl SensorSource for FakeSource {
    async fn locations(&self) -> Result<Vec<Location>, FetchError> {
        self.calls.lock().unwrap().push(Call::Locations);
        next_reply(&self.locations)
    }

    async fn summary(&self, location_sid: &str) -> Result<Option<Summary>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Summary(location_sid.to_string()));
        next_reply(&self.summaries)
    }

    async fn readings(&self, query: &ReadingsQuery) -> Result<Vec<RawReading>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Readings(query.clone()));
        next_reply(&self.readings)
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Records seen on the current thread since [`capture_logs`] was called.
///
/// `#[tokio::test]` runs the test body on the test's own thread, so parallel
/// tests never see each other's records.
pub(crate) struct LogCapture;

impl LogCapture {
    pub(crate) fn errors(&self) -> Vec<String> {
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }
}

pub(crate) fn capture_logs() -> LogCapture {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    LogCapture
}
