// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each domain area has its own subdirectory with:
// - Value objects
// - Entity
// - Commands
// - Events
// - Errors
// - Registry (the service owning the entities)
//
// ============================================================================

pub mod customer;
