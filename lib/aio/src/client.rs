use chipp_http::{HttpClient, HttpMethod, NoInterceptor};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::Result;

const API_BASE: &str = "https://io.adafruit.com/api/v2";

#[derive(Serialize)]
struct CreateData {
    value: f64,
}

/// A single data point of a feed. Adafruit IO returns feed values
/// as strings regardless of the type they were submitted with.
#[derive(Debug, Deserialize)]
struct DataPoint {
    value: String,
}

/// HTTP client for the Adafruit IO v2 API.
///
/// Feeds are named scalar slots on the service; `send` appends a data
/// point to a feed, `receive` reads the most recent one.
pub struct Client {
    http_client: HttpClient<NoInterceptor>,
    username: String,
    key: String,
}

impl Client {
    pub fn new(username: &str, key: &str) -> Result<Client> {
        let http_client = HttpClient::new(API_BASE)?;

        Ok(Client {
            http_client,
            username: username.to_string(),
            key: key.to_string(),
        })
    }

    pub async fn send(&self, feed: &str, value: f64) -> Result<()> {
        let mut request =
            self.http_client
                .new_request([self.username.as_str(), "feeds", feed, "data"]);

        request.set_method(HttpMethod::Post);
        request.set_json_body(&CreateData { value });
        request.add_header("X-AIO-Key", self.key.clone());

        trace!(
            "request: {}",
            String::from_utf8_lossy(&request.body.clone().unwrap_or_default())
        );

        self.http_client
            .perform_request(request, |req, response| {
                trace!("response: {}", String::from_utf8_lossy(&response.body));

                if response.status_code == 200 {
                    Ok(())
                } else {
                    Err((req, response).into())
                }
            })
            .await?;

        Ok(())
    }

    pub async fn receive(&self, feed: &str) -> Result<String> {
        let mut request = self.http_client.new_request([
            self.username.as_str(),
            "feeds",
            feed,
            "data",
            "last",
        ]);

        request.set_method(HttpMethod::Get);
        request.add_header("X-AIO-Key", self.key.clone());

        let data: DataPoint = self
            .http_client
            .perform_request(request, chipp_http::json::parse_json)
            .await?;

        trace!("{feed}: {data:?}");

        Ok(data.value)
    }
}
