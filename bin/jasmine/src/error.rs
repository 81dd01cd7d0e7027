use std::fmt;

#[derive(Debug)]
pub enum Error {
    Reading(std::io::Error),
    Json(serde_json::Error),
    Telemetry(aio::Error),
    Output(std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<aio::Error> for Error {
    fn from(err: aio::Error) -> Self {
        Self::Telemetry(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reading(err) => write!(f, "unable to read sensor data: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::Telemetry(err) => write!(f, "telemetry error: {err}"),
            Self::Output(err) => write!(f, "unable to write message: {err}"),
        }
    }
}

impl std::error::Error for Error {}
