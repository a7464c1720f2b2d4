use crate::core::converter::convert_with;
use crate::core::{ConfigProvider, ConversionSummary};
use crate::utils::error::Result;

pub struct ConvertEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ConvertEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        let input = self.config.input_path();
        let output = self.config.output_path();
        let options = self.config.convert_options();

        tracing::info!("Converting {} -> {}", input.display(), output.display());
        if options.skip_header {
            tracing::info!("First row will be treated as a header and skipped");
        }

        let summary = convert_with(input, output, &options)?;

        tracing::info!("Wrote {} electrodes", summary.rows_written);
        Ok(summary)
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}
