//! Domain records exchanged with the API and the checks run on user input
//! before it is submitted.

mod comment;
mod news;
mod user;
pub mod validate;
mod weather;

pub use comment::{Comment, NewComment};
pub use news::{Category, News, Paged};
pub use user::{Credentials, Role, Session, User, UserInput, UserUpdate};
pub use validate::ValidationError;
pub use weather::{Coordinates, Location, Weather};
