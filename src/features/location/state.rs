use crate::schema::{Coordinates, Location};
use crate::state::mvi::UiState;
use crate::state::Resource;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationState {
    pub location: Resource<Location>,
}

impl UiState for LocationState {}

impl LocationState {
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.location.data.as_ref().map(|l| l.location)
    }
}
