//! Unit test modules for the VulnCheck harness
//! Groups tests of individual layers that run against mocked services

mod api_client_tests;
