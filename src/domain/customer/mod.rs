// ============================================================================
// Customer Domain - Customer Registry
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Email)
// - Entity (Customer with derived full name and email)
// - Commands (RegisterCustomer, RemoveCustomer)
// - Events (CustomerRegistered, CustomerRemoved)
// - Errors (CustomerError enum)
// - Registry (CustomerRegistry owning the collection and all searches)
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod commands;
pub mod events;
pub mod errors;
pub mod registry;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use commands::*;
pub use events::*;
pub use errors::*;
pub use registry::*;
