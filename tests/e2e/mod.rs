mod helpers;
mod fixture_tests;
mod scenarios;
