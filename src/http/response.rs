use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Response snapshot captured after the body has been fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub duration_ms: u128,
    pub body: String,
}

impl HttpResponse {
    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Look up a top-level field in a JSON body.
    pub fn json_field(&self, name: &str) -> Option<serde_json::Value> {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()?
            .get(name)
            .cloned()
    }
}
