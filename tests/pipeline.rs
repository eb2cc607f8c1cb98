use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use quickcrop::{crop_download, decode, encode_jpeg, upload};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("png encode of a synthetic image");
    cursor.into_inner()
}

/// Builds the `image` form field the crop page would post: a JPEG data URI of
/// a synthetic gradient image.
fn data_uri(width: u32, height: u32) -> String {
    let jpeg = encode_jpeg(&gradient(width, height)).expect("jpeg encode");
    format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg))
}

// ---------------------------------------------------------------------------
// Upload path
// ---------------------------------------------------------------------------

#[test]
fn upload_round_trips_png_to_jpeg() {
    init_logs();
    let png = png_bytes(&gradient(64, 48));

    let b64 = upload(&png).expect("valid png should upload");
    let jpeg = STANDARD.decode(&b64).expect("upload returns valid base64");
    assert!(!jpeg.is_empty());

    // Round-trip stability: the re-encoded bytes decode again with the same
    // dimensions (lossy recompression is fine, dimensions are not).
    let back = decode(&jpeg).expect("normalized jpeg decodes");
    assert_eq!((back.width(), back.height()), (64, 48));
    let again = encode_jpeg(&back).expect("decoded buffer re-encodes");
    decode(&again).expect("second-generation jpeg still decodes");
}

#[test]
fn upload_accepts_jpeg_input() {
    init_logs();
    let jpeg = encode_jpeg(&gradient(32, 32)).unwrap();
    assert!(upload(&jpeg).is_ok());
}

#[test]
fn upload_rejects_empty_input() {
    init_logs();
    let err = upload(&[]).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("No file uploaded"));
}

#[test]
fn upload_rejects_non_image_bytes() {
    init_logs();
    let err = upload(b"<html>this is not an image</html>").unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Invalid image data"));
}

#[test]
fn upload_rejects_truncated_image() {
    init_logs();
    let png = png_bytes(&gradient(64, 48));
    let err = upload(&png[..20]).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Invalid image data"));
}

// ---------------------------------------------------------------------------
// Crop path
// ---------------------------------------------------------------------------

#[test]
fn identity_crop_preserves_dimensions() {
    init_logs();
    let out = crop_download(
        &data_uri(100, 100),
        r#"{"x": 0, "y": 0, "width": 100, "height": 100}"#,
    )
    .expect("identity crop succeeds");
    let img = decode(&out).unwrap();
    assert_eq!((img.width(), img.height()), (100, 100));
}

#[test]
fn interior_crop_yields_requested_size() {
    init_logs();
    let out = crop_download(
        &data_uri(100, 100),
        r#"{"x": 10, "y": 10, "width": 20, "height": 20}"#,
    )
    .unwrap();
    let img = decode(&out).unwrap();
    assert_eq!((img.width(), img.height()), (20, 20));
}

#[test]
fn overhanging_crop_is_clamped_not_rejected() {
    init_logs();
    let out = crop_download(
        &data_uri(100, 100),
        r#"{"x": 90, "y": 90, "width": 50, "height": 50}"#,
    )
    .expect("overhanging rectangle is clamped, not an error");
    let img = decode(&out).unwrap();
    assert_eq!((img.width(), img.height()), (10, 10));
}

#[test]
fn fully_out_of_bounds_crop_fails_at_encode() {
    init_logs();
    let err = crop_download(
        &data_uri(100, 100),
        r#"{"x": 200, "y": 200, "width": 10, "height": 10}"#,
    )
    .unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert!(err.to_string().contains("Error encoding"));
}

#[test]
fn fractional_crop_fields_are_truncated() {
    init_logs();
    let out = crop_download(
        &data_uri(100, 100),
        r#"{"x": 10.9, "y": 10.2, "width": 20.5, "height": 20.7}"#,
    )
    .unwrap();
    let img = decode(&out).unwrap();
    assert_eq!((img.width(), img.height()), (20, 20));
}

// ---------------------------------------------------------------------------
// Crop-path validation failures
// ---------------------------------------------------------------------------

#[test]
fn missing_crop_data_is_rejected() {
    init_logs();
    let err = crop_download(&data_uri(100, 100), "").unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Missing image or crop data"));
}

#[test]
fn missing_image_is_rejected() {
    init_logs();
    let err = crop_download("", r#"{"x": 0, "y": 0, "width": 1, "height": 1}"#).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Missing image or crop data"));
}

#[test]
fn malformed_crop_json_is_a_client_error() {
    init_logs();
    let err = crop_download(&data_uri(100, 100), "{not json").unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Invalid crop data"));
}

#[test]
fn data_uri_without_comma_is_rejected() {
    init_logs();
    let err = crop_download(
        "data:image/jpeg;base64AAAA",
        r#"{"x": 0, "y": 0, "width": 1, "height": 1}"#,
    )
    .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn undecodable_base64_payload_is_rejected() {
    init_logs();
    let err = crop_download(
        "data:image/jpeg;base64,@@not-base64@@",
        r#"{"x": 0, "y": 0, "width": 1, "height": 1}"#,
    )
    .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Invalid image data"));
}

#[test]
fn valid_base64_of_non_image_bytes_is_rejected() {
    init_logs();
    let field = format!("data:image/jpeg;base64,{}", STANDARD.encode(b"hello world"));
    let err = crop_download(&field, r#"{"x": 0, "y": 0, "width": 1, "height": 1}"#).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Invalid image data"));
}
