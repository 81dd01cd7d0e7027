use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::process::Command;

use crate::Result;

#[async_trait]
pub trait SensorSource {
    async fn acquire(&self) -> Result<()>;
}

/// Runs the sensor executable and waits for it to exit.
pub struct CommandSensor {
    bin: PathBuf,
}

impl CommandSensor {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

#[async_trait]
impl SensorSource for CommandSensor {
    async fn acquire(&self) -> Result<()> {
        // The exit status is not checked: a missing or failed executable
        // surfaces later, when the reading file turns out to be absent.
        match Command::new(&self.bin).status().await {
            Ok(status) => debug!("sensor exited with {status}"),
            Err(err) => warn!("unable to run sensor {}: {err}", self.bin.display()),
        }

        Ok(())
    }
}
