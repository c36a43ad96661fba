use crate::state::mvi::Reducer;

use super::intent::WeatherIntent;
use super::state::WeatherState;

pub struct WeatherReducer;

impl Reducer for WeatherReducer {
    type State = WeatherState;
    type Intent = WeatherIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WeatherIntent::Started { token, coordinates } => {
                state.weather.start(token);
                state.coordinates = Some(coordinates);
            }
            WeatherIntent::Loaded { token, weather } => {
                state.weather.accept(token, weather);
            }
            WeatherIntent::Failed { token, message } => {
                state.weather.fail(token, message);
            }
        }
        state
    }
}
