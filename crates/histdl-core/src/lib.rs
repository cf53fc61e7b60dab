pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod filename;
pub mod form;
pub mod request;
pub mod storage;
pub mod transport;
pub mod trigger;
