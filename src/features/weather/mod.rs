//! Current weather for a pair of coordinates.

mod intent;
mod reducer;
mod service;
mod state;

pub use intent::WeatherIntent;
pub use reducer::WeatherReducer;
pub use service::WeatherService;
pub use state::WeatherState;
