// ABOUTME: Configuration module root for the Larder server
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

/// Environment variable parsing into `ServerConfig`
pub mod environment;

pub use environment::{DatabaseConfig, DatabaseUrl, Environment, ServerConfig};
