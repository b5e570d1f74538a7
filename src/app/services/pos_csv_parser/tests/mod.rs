//! Test modules for the POS export parser

mod header_tests;
mod numeric_tests;
