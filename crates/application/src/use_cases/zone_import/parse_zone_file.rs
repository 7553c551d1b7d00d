use bindzone_domain::{BindParseResult, DomainError, ImportConfig};
use tracing::{info, instrument, warn};

use crate::services::parse_bind_zone_file;

/// Parses zone-file text for the bulk import flow, refusing inputs above
/// the configured size before any parsing work is done.
pub struct ParseZoneFileUseCase {
    config: ImportConfig,
}

impl ParseZoneFileUseCase {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn max_input_bytes(&self) -> usize {
        self.config.max_input_bytes
    }

    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub fn execute(&self, content: &str) -> BindParseResult {
        if content.len() > self.config.max_input_bytes {
            let error = DomainError::InputTooLarge {
                size: content.len(),
                limit: self.config.max_input_bytes,
            };
            warn!(error = %error, "Rejecting zone file");
            return BindParseResult::failure(error.to_string());
        }

        let result = parse_bind_zone_file(content);

        info!(
            records = result.records.len(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Zone file parsed"
        );

        result
    }
}
