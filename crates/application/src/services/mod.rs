pub mod zone_file;

pub use zone_file::parse_bind_zone_file;
