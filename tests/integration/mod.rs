//! Integration tests for the pagesmith content pipeline

mod batch_generation;
mod config_integration;
mod gateway_http;
mod pipeline_fallback;
mod repair_properties;
mod store_roundtrip;
