use crate::schema::{Coordinates, Weather};
use crate::state::mvi::UiState;
use crate::state::Resource;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    pub weather: Resource<Weather>,
    /// Where the last request was made for.
    pub coordinates: Option<Coordinates>,
}

impl UiState for WeatherState {}
