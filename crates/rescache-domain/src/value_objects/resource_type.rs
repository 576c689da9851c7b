//! Resource type identification
//!
//! Every cached resource belongs to exactly one [`ResourceType`], which
//! decides its cacheability and (through the region name resolver) the
//! region it lives in. Types of embedded resources and collection items
//! are inferred from field names or href paths.

use crate::constants::CUSTOM_DATA_SEGMENT;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Kind of remote resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    Account,
    AccountStoreMapping,
    ApiKey,
    Application,
    CustomData,
    Directory,
    Group,
    GroupMembership,
    Organization,
    Tenant,
    /// One-time token sent by email to verify an account
    EmailVerificationToken,
    /// One-time token used to reset a password
    PasswordResetToken,
    /// Result of an authentication attempt
    LoginAttempt,
    /// Request for an account through a social/external provider
    ProviderAccountAccess,
    /// Response to a provider account access request
    ProviderAccountResult,
    /// A listing page; only its items are ever cached
    Collection,
}

/// Collection path segments and the item type they hold
const COLLECTION_SEGMENTS: &[(&str, ResourceType)] = &[
    ("accounts", ResourceType::Account),
    ("accountStoreMappings", ResourceType::AccountStoreMapping),
    ("apiKeys", ResourceType::ApiKey),
    ("applications", ResourceType::Application),
    ("directories", ResourceType::Directory),
    ("groups", ResourceType::Group),
    ("groupMemberships", ResourceType::GroupMembership),
    ("memberships", ResourceType::GroupMembership),
    ("accountMemberships", ResourceType::GroupMembership),
    ("organizations", ResourceType::Organization),
    ("tenants", ResourceType::Tenant),
    ("emailVerificationTokens", ResourceType::EmailVerificationToken),
    ("passwordResetTokens", ResourceType::PasswordResetToken),
    ("loginAttempts", ResourceType::LoginAttempt),
];

impl ResourceType {
    /// Every resource type
    pub const ALL: [ResourceType; 16] = [
        Self::Account,
        Self::AccountStoreMapping,
        Self::ApiKey,
        Self::Application,
        Self::CustomData,
        Self::Directory,
        Self::Group,
        Self::GroupMembership,
        Self::Organization,
        Self::Tenant,
        Self::EmailVerificationToken,
        Self::PasswordResetToken,
        Self::LoginAttempt,
        Self::ProviderAccountAccess,
        Self::ProviderAccountResult,
        Self::Collection,
    ];

    /// Canonical camelCase name, also the default region name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::AccountStoreMapping => "accountStoreMapping",
            Self::ApiKey => "apiKey",
            Self::Application => "application",
            Self::CustomData => "customData",
            Self::Directory => "directory",
            Self::Group => "group",
            Self::GroupMembership => "groupMembership",
            Self::Organization => "organization",
            Self::Tenant => "tenant",
            Self::EmailVerificationToken => "emailVerificationToken",
            Self::PasswordResetToken => "passwordResetToken",
            Self::LoginAttempt => "loginAttempt",
            Self::ProviderAccountAccess => "providerAccountAccess",
            Self::ProviderAccountResult => "providerAccountResult",
            Self::Collection => "collection",
        }
    }

    /// Parse a canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Item type held by a collection path segment such as `groups`
    pub fn from_collection_segment(segment: &str) -> Option<Self> {
        COLLECTION_SEGMENTS
            .iter()
            .find(|(name, _)| *name == segment)
            .map(|(_, item_type)| *item_type)
    }

    /// Type of an embedded field, judged by its name.
    ///
    /// Singular names map to their resource type, known collection names
    /// map to [`ResourceType::Collection`].
    pub fn from_field_name(name: &str) -> Option<Self> {
        if Self::from_collection_segment(name).is_some() {
            return Some(Self::Collection);
        }
        match name {
            "defaultAccountStoreMapping" | "defaultGroupStoreMapping" => {
                Some(Self::AccountStoreMapping)
            }
            "defaultAccountStore" | "defaultGroupStore" => Some(Self::Directory),
            _ => Self::from_name(name).filter(|t| *t != Self::Collection),
        }
    }

    /// Infer the type addressed by an absolute href.
    ///
    /// `…/customData` is custom data, `…/{collection}/{id}` is an item of
    /// that collection, and a path ending in a collection segment is a
    /// collection. Anything else is unknown.
    pub fn from_href(href: &Url) -> Option<Self> {
        let segments: Vec<&str> = href
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();
        let last = *segments.last()?;
        if last == CUSTOM_DATA_SEGMENT {
            return Some(Self::CustomData);
        }
        if Self::from_collection_segment(last).is_some() {
            return Some(Self::Collection);
        }
        let parent = segments.len().checked_sub(2).map(|i| segments[i])?;
        Self::from_collection_segment(parent)
    }

    /// Item type of a collection addressed by `href` (`…/groups` → group)
    pub fn collection_item_type(href: &Url) -> Option<Self> {
        href.path_segments()?
            .filter(|seg| !seg.is_empty())
            .last()
            .and_then(Self::from_collection_segment)
    }

    /// Whether this type is a one-time token or an authentication assertion
    pub fn is_ephemeral(&self) -> bool {
        matches!(
            self,
            Self::EmailVerificationToken
                | Self::PasswordResetToken
                | Self::LoginAttempt
                | Self::ProviderAccountAccess
                | Self::ProviderAccountResult
        )
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
