//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use explaincode::config::{Config, ServiceConfig};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config pointing at `base_url` with a short timeout.
pub fn config_for(base_url: &str) -> Config {
    Config {
        service: ServiceConfig {
            base_url: base_url.to_string(),
            timeout_seconds: Some(5),
            ..ServiceConfig::default()
        },
        ..Config::default()
    }
}
