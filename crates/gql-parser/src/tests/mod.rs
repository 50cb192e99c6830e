//! Unit tests for the scanning and parsing pipeline.

mod ast_utils;
mod location_tests;
mod parser_error_tests;
mod parser_selection_tests;
mod parser_value_tests;
mod utils;
