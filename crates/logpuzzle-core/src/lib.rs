pub mod config;
pub mod logging;

pub mod fetch;
pub mod resolve;
pub mod retry;
pub mod scan;
