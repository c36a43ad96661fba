use serde::Deserialize;

use crate::schema::{Coordinates, Location, Weather};

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Deserialize)]
struct LocationReply {
    location: Location,
}

#[derive(Deserialize)]
struct WeatherReply {
    weather: Weather,
}

/// `/location` and `/location/weather`.
#[derive(Clone)]
pub struct LocationApi {
    client: ApiClient,
}

impl LocationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn locate(&self) -> Result<Location, ApiError> {
        let reply: LocationReply = self.client.get("/location", &[]).await?;
        Ok(reply.location)
    }

    pub async fn weather(&self, at: Coordinates, lang: &str) -> Result<Weather, ApiError> {
        let query = [
            ("latitude", at.latitude.to_string()),
            ("longitude", at.longitude.to_string()),
            ("lang", lang.to_string()),
        ];
        let reply: WeatherReply = self.client.get("/location/weather", &query).await?;
        Ok(reply.weather)
    }
}
