pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod search;
pub mod services;
