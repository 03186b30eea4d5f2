//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Catalog access (could swap the PokeAPI HTTP client for a stub or a mirror)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::CatalogPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockCatalogPort;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::CatalogError;
