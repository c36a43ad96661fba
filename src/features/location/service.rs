use crate::api::LocationApi;
use crate::state::Store;

use super::intent::LocationIntent;
use super::reducer::LocationReducer;
use super::state::LocationState;

pub struct LocationService {
    api: LocationApi,
    store: Store<LocationReducer>,
}

impl LocationService {
    pub fn new(api: LocationApi) -> Self {
        Self {
            api,
            store: Store::new(),
        }
    }

    pub fn store(&self) -> &Store<LocationReducer> {
        &self.store
    }

    pub fn snapshot(&self) -> LocationState {
        self.store.snapshot()
    }

    pub async fn load(&self) {
        let token = self.store.next_token();
        self.store.dispatch(LocationIntent::Started { token });

        match self.api.locate().await {
            Ok(location) => {
                tracing::debug!(city = ?location.city, "Location resolved");
                self.store.dispatch(LocationIntent::Loaded { token, location });
            }
            Err(err) => self.store.dispatch(LocationIntent::Failed {
                token,
                message: err.display_message("Error getting location"),
            }),
        }
    }
}
