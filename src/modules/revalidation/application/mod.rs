pub mod paths;
pub mod ports;
