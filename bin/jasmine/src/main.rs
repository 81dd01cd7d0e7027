use jasmine::{CommandSensor, Config, Pipeline, Result};

use log::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    info!("jasmine version {VERSION}");

    let config = Config::default();

    let sensor = CommandSensor::new(&config.sensor_bin);
    let telemetry = aio::Client::new(&config.username, &config.key)?;

    Pipeline::new(config, sensor, telemetry).run().await
}
