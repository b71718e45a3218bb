//! API endpoint tests

mod post_test;
