//! Client for removing functions from an OpenFaaS gateway.

pub mod config;
pub mod dispatcher;
pub mod gateway;
pub mod models;
pub mod remove;
pub mod resolver;
pub mod stack;
