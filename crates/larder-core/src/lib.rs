// ABOUTME: Core types and constants for the Larder recipe platform
// ABOUTME: Foundation crate with error handling, wire constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate shared by the query engine, the server, and the API client.
//! It changes infrequently, which keeps incremental builds of the other crates cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and conversions from storage and client errors
//! - **constants**: wire keys, the `"All"` sentinel, defaults, and environment names
//! - **models**: `Recipe`, `SeasonalRecipe`, `UserProfile`, `Post`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
