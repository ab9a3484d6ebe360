//! Integration tests exercising the public API end to end.

pub mod app_test;
pub mod dispatch_test;
