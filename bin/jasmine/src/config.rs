use std::path::PathBuf;

/// Fixed configuration for one relay run.
///
/// The original installation keeps all of these hardcoded; they live in
/// a struct so tests can point the pipeline at their own paths.
pub struct Config {
    /// Executable that reads the BME280 and writes `reading_path`.
    pub sensor_bin: PathBuf,
    /// JSON file produced by `sensor_bin`.
    pub reading_path: PathBuf,
    /// Text file the fetched message is written to.
    pub output_path: PathBuf,
    pub username: String,
    pub key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sensor_bin: PathBuf::from("/home/debian/243-510A16/Domotique243-600MA/Capteur"),
            reading_path: PathBuf::from("Donnee_BME280.json"),
            output_path: PathBuf::from(
                "/home/debian/243-510-A16/Domotique243-600MA/FICHIER_TEXT.txt",
            ),
            username: "jasmin".to_string(),
            key: "651706c4f84d4060a7b5b9db59e58862".to_string(),
        }
    }
}
