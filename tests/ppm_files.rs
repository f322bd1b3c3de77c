use std::fs;

use ppm_effects_rs::image_pipeline::ppm::{decode, encode};
use ppm_effects_rs::image_pipeline::{
    AsciiLayout, Effect, ErrorCategory, FilterConfig, FilterError, FilterPipeline, PpmEncoding,
    RasterImage,
};
use tempfile::tempdir;

#[test]
fn test_grayscale_on_2x2_ascii_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("rgbw.ppm");
    let output = dir.path().join("gray.ppm");
    fs::write(&input, "P3\n# primaries\n2 2\n255\n255 0 0  0 255 0\n0 0 255  255 255 255\n").unwrap();

    let pipeline = FilterPipeline::new(FilterConfig::new(Effect::Grayscale));
    let (message, timings) = pipeline.process_file(&input, &output).unwrap();
    assert!(message.contains("successful"));
    assert!(timings.get_step("write_output_file").is_some());

    let image = decode(&output).unwrap();
    assert_eq!(image.red, vec![76, 150, 29, 255]);
    assert_eq!(image.green, image.red);
    assert_eq!(image.blue, image.red);

    // Default output is binary.
    assert!(fs::read(&output).unwrap().starts_with(b"P6\n2 2\n255\n"));
}

#[test]
fn test_blur_on_3x3_16bit_binary_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wide.ppm");
    let output = dir.path().join("blurred.ppm");

    let red: Vec<u16> = vec![1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 65535];
    let green: Vec<u16> = (0..9).map(|i| i * 7000).collect();
    let blue: Vec<u16> = vec![65535; 9];
    let image = RasterImage::from_channels(3, 3, 65535, red.clone(), green.clone(), blue).unwrap();
    encode(&input, &image, true).unwrap();

    let config = FilterConfig::new(Effect::Blur { radius: 1 });
    FilterPipeline::new(config).process_file(&input, &output).unwrap();
    let blurred = decode(&output).unwrap();

    let mean = |values: &[u16]| {
        let sum: u64 = values.iter().map(|&v| v as u64).sum();
        let n = values.len() as u64;
        ((sum + n / 2) / n) as u16
    };

    assert_eq!(blurred.red[4], mean(&red));
    assert_eq!(blurred.green[4], mean(&green));
    assert_eq!(blurred.red[0], mean(&[red[0], red[1], red[3], red[4]]));
    assert_eq!(blurred.green[8], mean(&[green[4], green[5], green[7], green[8]]));
    assert!(blurred.blue.iter().all(|&s| s == 65535));
}

#[test]
fn test_wrong_magic_and_empty_file_are_format_errors() {
    let dir = tempdir().unwrap();
    let p4 = dir.path().join("bitmap.pbm");
    let empty = dir.path().join("empty.ppm");
    fs::write(&p4, "P4\n1 1\n\x00").unwrap();
    fs::write(&empty, "").unwrap();

    assert_eq!(decode(&p4).unwrap_err().category(), ErrorCategory::Format);
    assert_eq!(decode(&empty).unwrap_err().category(), ErrorCategory::Format);
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let err = decode(dir.path().join("missing.ppm")).unwrap_err();
    assert!(matches!(err, FilterError::InputReadError(_)));
    assert_eq!(err.category(), ErrorCategory::Io);

    let pipeline = FilterPipeline::new(FilterConfig::new(Effect::Inversion));
    let err = pipeline
        .process_file(dir.path().join("missing.ppm"), dir.path().join("out.ppm"))
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let image = RasterImage::new(1, 1, 255);
    let target = dir.path().join("no-such-dir").join("out.ppm");
    let err = encode(&target, &image, true).unwrap_err();
    assert!(matches!(err, FilterError::OutputWriteError(_)));
    assert_eq!(err.category(), ErrorCategory::Io);
}

#[test]
fn test_malformed_input_leaves_existing_output_untouched() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, "P3\n2 2\n255\n1 2 3").unwrap();
    fs::write(&output, "previous").unwrap();

    let pipeline = FilterPipeline::new(FilterConfig::new(Effect::Sepia));
    let err = pipeline.process_file(&input, &output).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Format);
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_ascii_layouts_decode_to_same_image() {
    let dir = tempdir().unwrap();
    let image = RasterImage::from_channels(
        3,
        2,
        300,
        vec![0, 1, 2, 3, 4, 5],
        vec![300, 299, 298, 297, 296, 295],
        vec![7, 7, 7, 7, 7, 7],
    )
    .unwrap();

    let legacy = dir.path().join("legacy.ppm");
    let rows = dir.path().join("rows.ppm");
    encode(&legacy, &image, false).unwrap();

    // Radius 0 leaves the image unchanged, so only the layout differs.
    let config = FilterConfig {
        encoding: PpmEncoding::Ascii,
        ascii_layout: AsciiLayout::RowPerLine,
        ..FilterConfig::new(Effect::Blur { radius: 0 })
    };
    FilterPipeline::new(config).process_file(&legacy, &rows).unwrap();

    assert_eq!(
        fs::read_to_string(&legacy).unwrap(),
        "P3\n3 2\n300\n0 300 7 \n1 299 7 2 298 7 3 297 7 \n4 296 7 5 295 7 "
    );
    assert_eq!(
        fs::read_to_string(&rows).unwrap(),
        "P3\n3 2\n300\n0 300 7 1 299 7 2 298 7\n3 297 7 4 296 7 5 295 7\n"
    );
    assert_eq!(decode(&legacy).unwrap(), image);
    assert_eq!(decode(&rows).unwrap(), image);
}

#[test]
fn test_ascii_output_through_pipeline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, "P3 1 1 15\n3 4 5\n").unwrap();

    let config = FilterConfig {
        encoding: PpmEncoding::Ascii,
        ..FilterConfig::new(Effect::Inversion)
    };
    FilterPipeline::new(config).process_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "P3\n1 1\n15\n12 11 10 \n");
}

#[test]
fn test_codec_and_pipeline_share_file_handling() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    let image = RasterImage::from_channels(1, 1, 255, vec![10], vec![20], vec![30]).unwrap();

    let encoded = encode(&input, &image, true).unwrap();
    assert_eq!(encoded, format!("Saving image is successful: {}", input.display()));

    let pipeline = FilterPipeline::new(FilterConfig::new(Effect::Inversion));
    let (message, _) = pipeline.process_file(&input, &output).unwrap();
    assert_eq!(message, format!("Saving image is successful: {}", output.display()));
    assert_eq!(fs::read(&output).unwrap(), b"P6\n1 1\n255\n\xf5\xeb\xe1");

    let err = pipeline
        .process_file(&input, dir.path().join("no-such-dir").join("out.ppm"))
        .unwrap_err();
    assert!(matches!(err, FilterError::OutputWriteError(_)));
}
