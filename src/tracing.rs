//! Adapters for emitting records through `tracing`.
//!
//! The integration is a display-value wrapper over the redacted flat form,
//! so field syntax like `tracing::info!(config = %config.tracing_redacted())`
//! can never leak a redacted field. The output is a flat string; subscribers
//! that want structure should log [`Record::to_redacted_json`] under the
//! `json` feature instead.

use tracing::field::{DisplayValue, display};

use crate::record::Record;

/// Extension trait for logging records through `tracing` field syntax.
pub trait RecordTracingExt {
    /// Wraps the redacted flat rendering as a `tracing` display value.
    fn tracing_redacted(&self) -> DisplayValue<String>;
}

impl RecordTracingExt for Record {
    fn tracing_redacted(&self) -> DisplayValue<String> {
        display(self.to_string())
    }
}
