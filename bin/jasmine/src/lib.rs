mod config;
mod pipeline;
mod reading;
mod sensor;

mod error;
pub use error::Error;

pub use config::Config;
pub use pipeline::{Pipeline, Telemetry};
pub use reading::SensorReading;
pub use sensor::{CommandSensor, SensorSource};

pub type Result<T> = std::result::Result<T, Error>;
