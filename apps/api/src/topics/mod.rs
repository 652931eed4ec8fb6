// Offline topic catalog and keyword resolution.
// Read-only static data; nothing here is mutated at runtime.

pub mod catalog;
pub mod handlers;
pub mod resolver;
