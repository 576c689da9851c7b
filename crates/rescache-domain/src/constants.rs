//! Domain layer constants
//!
//! Field names and path segments of the remote resource representation
//! that the cache reasons about.

// ============================================================================
// RESOURCE REPRESENTATION CONSTANTS
// ============================================================================

/// Field holding a resource's absolute URI
pub const HREF_FIELD: &str = "href";

/// Field holding the members of a collection page
pub const ITEMS_FIELD: &str = "items";

/// Field linking a token or result to the account it concerns
pub const ACCOUNT_FIELD: &str = "account";

/// Path segment (and field name) of a resource's custom data
pub const CUSTOM_DATA_SEGMENT: &str = "customData";
