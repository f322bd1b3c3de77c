use tracing::{debug, info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::Result,
    conversions::types::{Backend, FilterConfig},
    effects::{CudaBoxBlur, Effect},
    ppm::{read_file, write_file, ImageReader, ImageWriter, PpmReader, PpmWriter},
    raster::RasterImage,
    timing::{PipelineTimings, Timer},
};

pub struct FilterPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: FilterConfig,
}

impl FilterPipeline<PpmReader, PpmWriter> {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            reader: PpmReader,
            writer: PpmWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> FilterPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: FilterConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn apply_effect(&self, image: &mut RasterImage) -> Result<()> {
        match (self.config.effect, self.config.backend) {
            (Effect::Blur { radius }, Backend::Cuda) => CudaBoxBlur::new()?.process(image, radius),
            (effect, _) => {
                effect.apply(image);
                Ok(())
            }
        }
    }

    /// Decodes `input_data`, applies the configured effect and encodes the
    /// result into `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn process(&self, input_data: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!(effect = %self.config.effect.kind(), "Starting PPM filter pipeline");

        let mut image = {
            let _span = tracing::info_span!("decode_ppm").entered();
            let timer = Timer::start("decode_ppm");
            let image = self.reader.read_image(input_data)?;
            timings.record(timer);
            image
        };

        debug!(
            width = image.width,
            height = image.height,
            max_value = image.max_value,
            effect = ?self.config.effect,
            backend = %self.config.backend,
            "Decoded image"
        );

        {
            let _span = tracing::info_span!("apply_effect",
                effect = %self.config.effect.kind()
            ).entered();
            let timer = Timer::start("apply_effect");
            self.apply_effect(&mut image)?;
            timings.record(timer);
        }

        {
            let _span = tracing::info_span!("encode_ppm").entered();
            let timer = Timer::start("encode_ppm");
            self.writer.write_image(&image, output, &self.config.write_options())?;
            timings.record(timer);
        }

        info!(
            width = image.width,
            height = image.height,
            "Filter complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Runs the pipeline from `input_path` to `output_path`.
    ///
    /// The output file is only created once the whole image has been
    /// processed, so a malformed input leaves an existing output untouched.
    #[instrument(skip(self, input_path, output_path))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<(String, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Filtering file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            let timer = Timer::start("read_input_file");
            let data = read_file(input_path)?;
            timings.record(timer);
            data
        };

        let mut encoded = Vec::new();
        timings.extend(self.process(&input_data, &mut encoded)?);

        let message = {
            let _span = tracing::info_span!("write_output_file").entered();
            let timer = Timer::start("write_output_file");
            let message = write_file(output_path, &encoded)?;
            timings.record(timer);
            message
        };

        Ok((message, timings))
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}
