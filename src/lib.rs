pub mod domain;
pub mod error;
pub mod logging;
pub mod repository;
pub mod service;
pub mod test_utils;
