//! Integration tests for the lineup grammar parser.

mod hero_tests;
