// ABOUTME: Application constants organized by domain
// ABOUTME: The "All" sentinel, time bucket values, defaults, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Constants shared by the query engine, the server, and the client.

/// Wire contract shared with the mobile client
pub mod wire {
    /// Placeholder meaning "apply no constraint for this field"
    pub const ALL_SENTINEL: &str = "All";

    /// Wire value for the "up to 15 minutes" bucket
    pub const TIME_BUCKET_15: &str = "15";
    /// Wire value for the "15 to 30 minutes" bucket
    pub const TIME_BUCKET_30: &str = "30";
    /// Wire value for the "31 to 60 minutes" bucket
    pub const TIME_BUCKET_60: &str = "60";
}

/// Service identification for logs
pub mod service_names {
    /// Server binary / log target name
    pub const LARDER_SERVER: &str = "larder-server";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/larder.db";
    /// Default per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Timeout applied by the API client
    pub const CLIENT_TIMEOUT_SECS: u64 = 15;
}

/// Pagination limits for list endpoints
pub mod limits {
    /// Page size when none is requested
    pub const DEFAULT_PAGE_SIZE: u32 = 50;
    /// Largest page size honoured
    pub const MAX_PAGE_SIZE: u32 = 200;
}

/// Environment variable names read at startup
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
}
