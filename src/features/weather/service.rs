use crate::api::LocationApi;
use crate::schema::Coordinates;
use crate::state::Store;

use super::intent::WeatherIntent;
use super::reducer::WeatherReducer;
use super::state::WeatherState;

pub struct WeatherService {
    api: LocationApi,
    store: Store<WeatherReducer>,
    lang: String,
}

impl WeatherService {
    pub fn new(api: LocationApi, lang: impl Into<String>) -> Self {
        Self {
            api,
            store: Store::new(),
            lang: lang.into(),
        }
    }

    pub fn store(&self) -> &Store<WeatherReducer> {
        &self.store
    }

    pub fn snapshot(&self) -> WeatherState {
        self.store.snapshot()
    }

    pub async fn load(&self, coordinates: Coordinates) {
        let token = self.store.next_token();
        self.store
            .dispatch(WeatherIntent::Started { token, coordinates });

        match self.api.weather(coordinates, &self.lang).await {
            Ok(weather) => self.store.dispatch(WeatherIntent::Loaded { token, weather }),
            Err(err) => {
                tracing::debug!(error = %err, "Weather request failed");
                self.store.dispatch(WeatherIntent::Failed {
                    token,
                    message: err.display_message("Error loading weather"),
                });
            }
        }
    }
}
