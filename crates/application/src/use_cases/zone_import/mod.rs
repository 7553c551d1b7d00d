mod parse_zone_file;

pub use parse_zone_file::ParseZoneFileUseCase;
