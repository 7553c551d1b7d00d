mod zone_fixtures;

pub use zone_fixtures::*;
