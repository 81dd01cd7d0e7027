use serde::Deserialize;

/// One BME280 measurement, decoded from the JSON file the sensor
/// executable writes. Field names are the literal keys that executable
/// uses. All three are required.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct SensorReading {
    #[serde(rename = "Humidite")]
    pub humidity: f64,
    #[serde(rename = "Pres")]
    pub pressure: f64,
    #[serde(rename = "Temp")]
    pub temperature: f64,
}
