pub mod errors;

pub use errors::AirframeError;
