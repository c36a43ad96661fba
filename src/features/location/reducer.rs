use crate::state::mvi::Reducer;

use super::intent::LocationIntent;
use super::state::LocationState;

pub struct LocationReducer;

impl Reducer for LocationReducer {
    type State = LocationState;
    type Intent = LocationIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LocationIntent::Started { token } => state.location.start(token),
            LocationIntent::Loaded { token, location } => {
                state.location.accept(token, location);
            }
            LocationIntent::Failed { token, message } => {
                state.location.fail(token, message);
            }
        }
        state
    }
}
