use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{Directions, DirectionsRoute, MappingProvider};
use crate::error::{upstream_error, Error};

#[derive(Clone, Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    error_message: Option<String>,
}

/// Google Maps Directions API client.
#[derive(Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }

    fn directions_url(&self) -> String {
        format!("https://{}/maps/api/directions/json", self.api_base)
    }
}

#[async_trait]
impl MappingProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn directions(&self, origin: &str, destination: &str) -> Result<Directions, Error> {
        let res = self
            .client
            .get(self.directions_url())
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            return Err(upstream_error(format!(
                "directions request failed with http status {}",
                status_code
            )));
        }

        let raw: Value = res.json().await?;

        parse_directions(raw)
    }
}

pub fn parse_directions(raw: Value) -> Result<Directions, Error> {
    let data: Response = serde_json::from_value(raw.clone())?;

    match data.status.as_str() {
        "OK" => Ok(Directions {
            routes: data.routes,
            raw,
        }),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(Directions {
            routes: vec![],
            raw,
        }),
        status => Err(upstream_error(format!(
            "directions status {}: {}",
            status,
            data.error_message.unwrap_or_default()
        ))),
    }
}
