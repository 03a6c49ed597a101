// ABOUTME: User profile and community post models for the social cooking feed
// ABOUTME: Profiles are keyed by the identity provider's uid; posts get server-assigned UUIDs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity-provider uid
    pub id: String,
    /// Public handle
    pub username: String,
    /// Contact email
    pub email: String,
    /// Short biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Recipe ids the user bookmarked, without duplicates
    #[serde(default)]
    pub saved_recipes: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A post in the community feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier
    pub id: Uuid,
    /// Author's profile id
    pub user_id: String,
    /// Author's handle at posting time
    pub username: String,
    /// Post body
    pub content: String,
    /// Attached image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Recipe the post is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    /// Like counter
    pub likes: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
