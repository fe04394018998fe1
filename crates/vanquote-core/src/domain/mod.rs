mod params;
mod position;
mod ticker;

pub use params::{RequestParameters, DEFAULT_QUANTITY};
pub use position::Position;
pub use ticker::Ticker;
