pub mod zone_import;

// Re-export use cases
pub use zone_import::ParseZoneFileUseCase;
