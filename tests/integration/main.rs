#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod plugin_tests;
