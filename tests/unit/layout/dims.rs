use super::*;

#[test]
fn zero_pixels_is_empty_pixel_data() {
    let err = compute_dimensions(0, Alignment::NONE).unwrap_err();
    assert!(matches!(err, Bin2PngError::EmptyPixelData));

    let err = compute_dimensions(0, Alignment::new(16, 4).unwrap()).unwrap_err();
    assert!(matches!(err, Bin2PngError::EmptyPixelData));
}

#[test]
fn zero_alignment_is_rejected() {
    assert!(Alignment::new(0, 4).is_err());
    assert!(Alignment::new(16, 0).is_err());
    let err = compute_dimensions(10, Alignment { w: 0, h: 1 }).unwrap_err();
    assert!(matches!(err, Bin2PngError::Validation(_)));
}

#[test]
fn thirty_three_pixels_make_a_six_by_six() {
    // 100 bytes of rgb888.
    let dims = compute_dimensions(100 / 3, Alignment::NONE).unwrap();
    assert_eq!(
        dims,
        Dimensions {
            width: 6,
            height: 6
        }
    );
    assert_eq!(dims.byte_len(3), 108);
}

#[test]
fn perfect_squares_stay_square() {
    for side in [1usize, 2, 7, 64, 1000] {
        let n = (side * side) as u64;
        let dims = compute_dimensions(n, Alignment::NONE).unwrap();
        assert_eq!((dims.width, dims.height), (side, side));
    }
}

#[test]
fn single_pixel_with_alignment() {
    let dims = compute_dimensions(1, Alignment::new(16, 4).unwrap()).unwrap();
    assert_eq!((dims.width, dims.height), (16, 4));
}

#[test]
fn thousand_pixels_tile_aligned() {
    let dims = compute_dimensions(1000, Alignment::new(16, 4).unwrap()).unwrap();
    // ceil(sqrt(1000)) = 32, already a multiple of 16; ceil(1000 / 32) = 32.
    assert_eq!((dims.width, dims.height), (32, 32));
}

#[test]
fn guarantees_hold_across_counts_and_alignments() {
    let aligns = [
        Alignment::NONE,
        Alignment::new(16, 4).unwrap(),
        Alignment::new(8, 8).unwrap(),
        Alignment::new(3, 5).unwrap(),
        Alignment::new(1, 7).unwrap(),
    ];
    for align in aligns {
        for n in (1u64..=600).chain([1023, 1024, 1025, 65_537, 1_000_003]) {
            let dims = compute_dimensions(n, align).unwrap();
            assert!(dims.pixels() as u64 >= n, "{n} {align:?} {dims:?}");
            assert_eq!(dims.width % align.w, 0, "{n} {align:?} {dims:?}");
            assert_eq!(dims.height % align.h, 0, "{n} {align:?} {dims:?}");
        }
    }
}

#[test]
fn width_is_ceil_sqrt_without_alignment() {
    let dims = compute_dimensions(2, Alignment::NONE).unwrap();
    assert_eq!((dims.width, dims.height), (2, 1));
    let dims = compute_dimensions(17, Alignment::NONE).unwrap();
    assert_eq!((dims.width, dims.height), (5, 4));
}

#[test]
fn to_u32_rejects_oversized_sides() {
    let ok = Dimensions {
        width: 6,
        height: 6,
    };
    assert_eq!(ok.to_u32().unwrap(), (6, 6));

    #[cfg(target_pointer_width = "64")]
    {
        let big = Dimensions {
            width: (u32::MAX as usize) + 1,
            height: 1,
        };
        assert!(big.to_u32().is_err());
    }
}
