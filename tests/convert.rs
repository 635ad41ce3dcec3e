use barch::{
    decode_image, encode_image, BarchError, BarchImage, RasterImage, Scanline,
};
use rand_distr::{Distribution, Uniform};

fn round_trip(raster: &RasterImage) -> BarchImage {
    let barch = encode_image(raster).unwrap();
    assert_eq!(barch.width(), raster.width());
    assert_eq!(barch.height(), raster.height());
    assert_eq!(barch.flags().len(), raster.height() as usize);
    let decoded = decode_image(&barch).unwrap();
    assert_eq!(&decoded, raster);
    barch
}

fn mixed_image(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let sample = match (row % 3, col / 4 % 2) {
                (0, 0) => 255,
                (0, _) => 0,
                (1, _) => (col * 7 + row) as u8 | 1,
                _ => 255,
            };
            data.push(sample);
        }
    }
    RasterImage::new(width, height, data).unwrap()
}

#[test]
fn test_mixed_rows() {
    let raster = mixed_image(16, 6);
    let barch = round_trip(&raster);
    assert_eq!(barch.flags(), [true, false, true, true, false, true]);
    assert_eq!(barch.compressed_rows(), 4);
    // Rows that are not packed keep their samples.
    assert_eq!(barch.line(1), &Scanline::Raw(raster.line(1).to_vec()));
    // An all-white row of 16 packs into a single byte.
    assert_eq!(barch.line(2), &Scanline::Packed(vec![0]));
}

#[test]
fn test_small_images() {
    round_trip(&RasterImage::new(1, 1, vec![255]).unwrap());
    round_trip(&RasterImage::new(1, 1, vec![42]).unwrap());
    round_trip(&RasterImage::new(3, 1, vec![0, 0, 0]).unwrap());
    round_trip(&RasterImage::new(1, 5, vec![0, 255, 3, 0, 0]).unwrap());
    for width in [1, 3, 4, 5, 7, 8, 13, 14, 15, 16] {
        round_trip(&mixed_image(width, 7));
    }
}

#[test]
fn test_random_images() {
    let mut rng = rand::thread_rng();
    let pick = Uniform::new(0, 4);
    let gray = Uniform::new(1, 255);

    for width in [5u32, 17, 32, 61] {
        let height = 9;
        let mut data = Vec::new();
        for _ in 0..width * height {
            data.push(match pick.sample(&mut rng) {
                0 | 1 => 255,
                2 => 0,
                _ => gray.sample(&mut rng) as u8,
            });
        }
        round_trip(&RasterImage::new(width, height, data).unwrap());
    }
}

#[test]
fn test_accessors() {
    let raster = RasterImage::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(raster.pixel(2, 1), 6);
    assert_eq!(raster.line(0), [1, 2, 3]);
    assert_eq!(raster.lines().count(), 2);
    assert_eq!(raster.bits_per_pixel(), 8);
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        RasterImage::new(0, 4, vec![]),
        Err(BarchError::InvalidDimensions { width: 0, height: 4 })
    ));
    assert!(matches!(
        RasterImage::new(4, 0, vec![]),
        Err(BarchError::InvalidDimensions { .. })
    ));
    // The buffer must hold width * height samples.
    assert!(matches!(
        RasterImage::new(4, 2, vec![0; 7]),
        Err(BarchError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        BarchImage::new(0, vec![Scanline::Raw(vec![])]),
        Err(BarchError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        BarchImage::new(4, vec![]),
        Err(BarchError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_unsupported_depth() {
    let raster = RasterImage::with_depth(4, 1, 24, vec![0; 4]).unwrap();
    assert_eq!(
        encode_image(&raster),
        Err(BarchError::UnsupportedSampleDepth(24))
    );
}

#[test]
fn test_raw_row_length() {
    assert!(matches!(
        BarchImage::new(4, vec![Scanline::Raw(vec![1, 2, 3])]),
        Err(BarchError::MalformedContainer(_))
    ));
}

#[test]
fn test_packed_row_length() {
    // A packed row must hold exactly the stream of 'width' samples.
    assert_eq!(
        BarchImage::new(8, vec![Scanline::Packed(vec![])]),
        Err(BarchError::DecodeUnderrun {
            produced: 0,
            width: 8
        })
    );
    assert!(matches!(
        BarchImage::new(8, vec![Scanline::Packed(vec![0, 0])]),
        Err(BarchError::MalformedContainer(_))
    ));
    let barch = BarchImage::new(8, vec![Scanline::Packed(vec![0])]).unwrap();
    assert_eq!(decode_image(&barch).unwrap().data(), [255; 8]);
}
