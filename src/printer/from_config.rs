//! Printer construction from a loaded [`Config`].

use super::{Printer, PrinterBuilder};
use crate::config::Config;
use crate::internal;

impl Printer {
    /// Printer with the adapters enabled in `config`: pretty format on the
    /// console and CSV lines on disk.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        PrinterBuilder::from_config(config, 0).build()
    }
}

impl PrinterBuilder {
    /// `extra_layers` is added to `general.internal_layers` for callers that wrap
    /// the printer themselves (the facade adds one).
    #[must_use]
    pub fn from_config(config: &Config, extra_layers: usize) -> Self {
        let level = config.parse_level();
        let layers = config.general.internal_layers + extra_layers;
        internal::debug(
            "PRINTER",
            &format!("Building printer: level={level}, internal_layers={layers}"),
        );

        let mut builder = Self::new().level(level).internal_layers(layers);
        let mut enabled = Vec::new();

        if config.console.enabled {
            builder = builder
                .console()
                .show_thread_info(config.console.show_thread_info)
                .method_count(config.console.method_count)
                .method_offset(config.console.method_offset)
                .utf8_boundaries(config.console.utf8_boundaries)
                .done();
            enabled.push("console");
        }

        if config.disk.enabled {
            let dir = config.disk_dir();
            internal::debug("PRINTER", &format!("Disk directory: {}", dir.display()));
            builder = builder
                .disk()
                .dir(dir)
                .timestamp_format(&config.disk.timestamp_format)
                .done();
            enabled.push("disk");
        }

        if enabled.is_empty() {
            internal::warn("PRINTER", "No adapters enabled");
        } else {
            internal::debug("PRINTER", &format!("Adapters: [{}]", enabled.join(", ")));
        }
        builder
    }
}
