
mod fixture_tests;
