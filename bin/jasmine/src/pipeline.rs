use async_trait::async_trait;
use log::info;

use crate::{Config, Error, Result, SensorReading, SensorSource};

#[async_trait]
pub trait Telemetry {
    async fn send(&self, feed: &str, value: f64) -> Result<()>;
    async fn receive(&self, feed: &str) -> Result<String>;
}

#[async_trait]
impl Telemetry for aio::Client {
    async fn send(&self, feed: &str, value: f64) -> Result<()> {
        aio::Client::send(self, feed, value).await?;
        Ok(())
    }

    async fn receive(&self, feed: &str) -> Result<String> {
        Ok(aio::Client::receive(self, feed).await?)
    }
}

/// One pass of the relay: acquire, parse, publish, fetch, persist.
pub struct Pipeline<S, T> {
    config: Config,
    sensor: S,
    telemetry: T,
}

impl<S, T> Pipeline<S, T>
where
    S: SensorSource,
    T: Telemetry,
{
    pub fn new(config: Config, sensor: S, telemetry: T) -> Self {
        Self {
            config,
            sensor,
            telemetry,
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.sensor.acquire().await?;

        let reading = self.read_reading().await?;

        info!("humidite: {}", reading.humidity);
        info!("pression atmospherique: {}", reading.pressure);
        info!("temperature: {}", reading.temperature);

        self.telemetry.send("humidite", reading.humidity).await?;

        // pressure submission is currently disabled
        // self.telemetry
        //     .send("pression-atmospherique", reading.pressure)
        //     .await?;

        self.telemetry
            .send("temperature", reading.temperature)
            .await?;

        let message = self.telemetry.receive("message").await?;

        info!("message: {message}");

        tokio::fs::write(&self.config.output_path, &message)
            .await
            .map_err(Error::Output)?;

        Ok(())
    }

    async fn read_reading(&self) -> Result<SensorReading> {
        let content = tokio::fs::read_to_string(&self.config.reading_path)
            .await
            .map_err(Error::Reading)?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::path::Path;
    use std::sync::Mutex;

    use super::*;
    use crate::CommandSensor;

    struct NoopSensor;

    #[async_trait]
    impl SensorSource for NoopSensor {
        async fn acquire(&self) -> Result<()> {
            Ok(())
        }
    }

    struct FakeTelemetry {
        sent: Mutex<Vec<(String, f64)>>,
        message: String,
    }

    impl FakeTelemetry {
        fn new(message: &str) -> Self {
            Self {
                sent: Mutex::new(vec![]),
                message: message.to_string(),
            }
        }
    }

    #[async_trait]
    impl Telemetry for FakeTelemetry {
        async fn send(&self, feed: &str, value: f64) -> Result<()> {
            self.sent.lock().unwrap().push((feed.to_string(), value));
            Ok(())
        }

        async fn receive(&self, feed: &str) -> Result<String> {
            assert_eq!(feed, "message");
            Ok(self.message.clone())
        }
    }

    fn config(dir: &Path) -> Config {
        Config {
            sensor_bin: dir.join("Capteur"),
            reading_path: dir.join("Donnee_BME280.json"),
            output_path: dir.join("FICHIER_TEXT.txt"),
            username: "test".to_string(),
            key: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_sends_humidity_and_temperature() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        std::fs::write(
            &config.reading_path,
            r#"{"Humidite": 52.0, "Pres": 101.325, "Temp": 25.5}"#,
        )
        .unwrap();

        let pipeline = Pipeline::new(config, NoopSensor, FakeTelemetry::new(""));
        pipeline.run().await.unwrap();

        let sent = pipeline.telemetry.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![
                ("humidite".to_string(), 52.0),
                ("temperature".to_string(), 25.5)
            ]
        );
    }

    #[tokio::test]
    async fn test_run_overwrites_output_with_message() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        std::fs::write(
            &config.reading_path,
            r#"{"Humidite": 52.0, "Pres": 101.325, "Temp": 25.5}"#,
        )
        .unwrap();
        std::fs::write(&config.output_path, "some much longer previous message").unwrap();

        let output_path = config.output_path.clone();
        let pipeline = Pipeline::new(config, NoopSensor, FakeTelemetry::new("Jasmin le boss"));
        pipeline.run().await.unwrap();

        let written = std::fs::read_to_string(output_path).unwrap();
        assert_eq!(written, "Jasmin le boss");
    }

    #[tokio::test]
    async fn test_incomplete_reading_fails_before_any_send() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        std::fs::write(&config.reading_path, r#"{"Humidite": 52.0, "Pres": 101.325}"#).unwrap();

        let pipeline = Pipeline::new(config, NoopSensor, FakeTelemetry::new(""));
        let result = pipeline.run().await;

        assert!(matches!(result, Err(Error::Json(_))));
        assert!(pipeline.telemetry.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_absent_sensor_fails_on_missing_reading() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        // No executable at sensor_bin and no reading file: the spawn
        // failure is swallowed, the read is not.
        let sensor = CommandSensor::new(&config.sensor_bin);
        let pipeline = Pipeline::new(config, sensor, FakeTelemetry::new(""));
        let result = pipeline.run().await;

        match result {
            Err(Error::Reading(err)) => assert_eq!(err.kind(), ErrorKind::NotFound),
            other => panic!("expected reading error, got {other:?}"),
        }
        assert!(pipeline.telemetry.sent.lock().unwrap().is_empty());
    }
}
