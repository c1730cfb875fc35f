mod test_utils;

use cavalier_clipper::{
    bound::{Bound, PolygonType},
    sweep::{is_contributing, ClipType, FillType},
};
use test_utils::vertical_bound;

const CLIP_TYPES: [ClipType; 4] = [
    ClipType::Intersection,
    ClipType::Union,
    ClipType::Difference,
    ClipType::Xor,
];

const FILL_TYPES: [FillType; 4] = [
    FillType::EvenOdd,
    FillType::NonZero,
    FillType::Positive,
    FillType::Negative,
];

const WC2_VALUES: [i32; 3] = [-1, 0, 1];

/// Expected result for winding_count2 = -1, 0, 1 once the own fill test passed.
fn expected_by_other_count(
    clip_type: ClipType,
    poly_type: PolygonType,
    other_fill: FillType,
) -> [bool; 3] {
    use FillType::*;
    let inside = match other_fill {
        EvenOdd | NonZero => [true, false, true],
        Positive => [false, false, true],
        Negative => [true, false, false],
    };
    let outside = match other_fill {
        EvenOdd | NonZero => [false, true, false],
        Positive => [true, true, false],
        Negative => [false, true, true],
    };

    match (clip_type, poly_type) {
        (ClipType::Intersection, _) => inside,
        (ClipType::Union, _) => outside,
        (ClipType::Difference, PolygonType::Subject) => outside,
        (ClipType::Difference, PolygonType::Clip) => inside,
        (ClipType::Xor, _) => [true, true, true],
    }
}

const NONE: &[i32] = &[];
const ANY_NON_ZERO: &[i32] = &[-2, -1, 1, 2];
const ABS_ONE: &[i32] = &[-1, 1];
const PLUS_ONE: &[i32] = &[1];
const MINUS_ONE: &[i32] = &[-1];

/// Own winding counts passing and failing the own fill test.
fn own_counts(own_fill: FillType) -> (&'static [i32], &'static [i32]) {
    const NOT_ABS_ONE: &[i32] = &[-2, 0, 2];
    const NOT_PLUS_ONE: &[i32] = &[-1, 0, 2];
    const NOT_MINUS_ONE: &[i32] = &[-2, 0, 1];
    match own_fill {
        FillType::EvenOdd => (ANY_NON_ZERO, NONE),
        FillType::NonZero => (ABS_ONE, NOT_ABS_ONE),
        FillType::Positive => (PLUS_ONE, NOT_PLUS_ONE),
        FillType::Negative => (MINUS_ONE, NOT_MINUS_ONE),
    }
}

fn bound_with(poly_type: PolygonType, wc: i32, wc2: i32) -> Bound<i64> {
    let mut b = vertical_bound(0, poly_type, 1);
    b.winding_count = wc;
    b.winding_count2 = wc2;
    b
}

fn fill_types(poly_type: PolygonType, own: FillType, other: FillType) -> (FillType, FillType) {
    match poly_type {
        PolygonType::Subject => (own, other),
        PolygonType::Clip => (other, own),
    }
}

#[test]
fn decision_table() {
    let mut cases = 0;
    for clip_type in CLIP_TYPES {
        for poly_type in [PolygonType::Subject, PolygonType::Clip] {
            for own_fill in FILL_TYPES {
                for other_fill in FILL_TYPES {
                    let (subject_fill, clip_fill) = fill_types(poly_type, own_fill, other_fill);
                    let expected = expected_by_other_count(clip_type, poly_type, other_fill);
                    let (passing, failing) = own_counts(own_fill);
                    for (i, &wc2) in WC2_VALUES.iter().enumerate() {
                        for &wc in passing {
                            let b = bound_with(poly_type, wc, wc2);
                            assert_eq!(
                                is_contributing(&b, clip_type, subject_fill, clip_fill),
                                expected[i],
                                "{:?} {:?}, own fill: {:?}, other fill: {:?}, wc: {}, wc2: {}",
                                clip_type, poly_type, own_fill, other_fill, wc, wc2
                            );
                            cases += 1;
                        }
                        for &wc in failing {
                            let b = bound_with(poly_type, wc, wc2);
                            assert!(
                                !is_contributing(&b, clip_type, subject_fill, clip_fill),
                                "own fill rejects: {:?} {:?}, own fill: {:?}, wc: {}",
                                clip_type, poly_type, own_fill, wc
                            );
                        }
                    }
                }
            }
        }
    }
    assert!(cases >= 4 * 16 * 3);
}

#[test]
fn xor_contributes_whenever_own_fill_passes() {
    for own_fill in FILL_TYPES {
        for other_fill in FILL_TYPES {
            for poly_type in [PolygonType::Subject, PolygonType::Clip] {
                let (subject_fill, clip_fill) = fill_types(poly_type, own_fill, other_fill);
                for wc2 in -3..=3 {
                    let (passing, _) = own_counts(own_fill);
                    for &wc in passing {
                        let b = bound_with(poly_type, wc, wc2);
                        assert!(is_contributing(&b, ClipType::Xor, subject_fill, clip_fill));
                    }
                }
            }
        }
    }
}

#[test]
fn difference_is_asymmetric() {
    let subject = bound_with(PolygonType::Subject, 1, 1);
    let clip = bound_with(PolygonType::Clip, 1, 1);
    let nz = FillType::NonZero;
    // subject edge inside the clip set is removed, clip edge inside the subject set is kept
    assert!(!is_contributing(&subject, ClipType::Difference, nz, nz));
    assert!(is_contributing(&clip, ClipType::Difference, nz, nz));

    let subject = bound_with(PolygonType::Subject, 1, 0);
    let clip = bound_with(PolygonType::Clip, 1, 0);
    assert!(is_contributing(&subject, ClipType::Difference, nz, nz));
    assert!(!is_contributing(&clip, ClipType::Difference, nz, nz));
}
