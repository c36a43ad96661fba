use crate::schema::{Coordinates, Weather};
use crate::state::mvi::Intent;
use crate::state::RequestToken;

#[derive(Debug, Clone)]
pub enum WeatherIntent {
    Started {
        token: RequestToken,
        coordinates: Coordinates,
    },
    Loaded {
        token: RequestToken,
        weather: Weather,
    },
    Failed {
        token: RequestToken,
        message: String,
    },
}

impl Intent for WeatherIntent {}
