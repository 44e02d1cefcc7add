pub mod adapters;
pub mod api;
pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod ports;
