mod assertions;
mod test_app;

// Re-export
pub use assertions::{assert_bit_identical, assert_report_close, assert_vector_close};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
