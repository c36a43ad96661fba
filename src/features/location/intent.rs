use crate::schema::Location;
use crate::state::mvi::Intent;
use crate::state::RequestToken;

#[derive(Debug, Clone)]
pub enum LocationIntent {
    Started { token: RequestToken },
    Loaded { token: RequestToken, location: Location },
    Failed { token: RequestToken, message: String },
}

impl Intent for LocationIntent {}
