// SPDX-License-Identifier: MPL-2.0
//! Aspect-ratio-preserving fit of a frame inside a viewport.
//!
//! Given the viewport size and the frame size, computes the largest
//! rectangle that fits the viewport while keeping the frame's aspect
//! ratio, centered on the viewport (letterbox/pillarbox). Offsets are
//! expressed relative to the viewport center and truncated toward zero,
//! matching the renderer's integer placement.

/// Where and at what size to draw a frame, relative to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge, always `trunc(-width / 2)`.
    pub x: i32,

    /// Top edge, always `trunc(-height / 2)`.
    pub y: i32,

    /// Rendered width; equals the viewport width on the binding axis.
    pub width: f32,

    /// Rendered height; equals the viewport height on the binding axis.
    pub height: f32,
}

/// Computes the letterboxed placement of a frame inside a viewport.
///
/// Returns `None` when either the viewport or the frame has no area:
/// a zero-sized frame means no frame has arrived yet, and a zero-sized
/// viewport leaves nothing to draw into. The zero checks also make the
/// ratio divisions safe.
///
/// Equal aspect ratios take the width-bound branch; there is no visual
/// difference at equality.
#[must_use]
pub fn fit(
    viewport_width: f32,
    viewport_height: f32,
    image_width: f32,
    image_height: f32,
) -> Option<Placement> {
    if viewport_width <= 0.0
        || viewport_height <= 0.0
        || image_width <= 0.0
        || image_height <= 0.0
    {
        return None;
    }

    // Double precision internally: which side of an integer the half
    // extents land on decides the truncated offsets.
    let (vw, vh) = (f64::from(viewport_width), f64::from(viewport_height));
    let (iw, ih) = (f64::from(image_width), f64::from(image_height));

    let viewport_ratio = vw / vh;
    let image_ratio = iw / ih;

    let (width, height) = if viewport_ratio > image_ratio {
        // Viewport is relatively wider: height is the binding constraint.
        (vh * image_ratio, vh)
    } else {
        // Viewport is relatively taller or equal: width is the binding constraint.
        (vw, vw / image_ratio)
    };

    // Truncate the centering offsets toward zero. Truncation, not
    // rounding: for odd extents this biases one unit toward the
    // top-left, which is the renderer's observable behavior.
    #[allow(clippy::cast_possible_truncation)]
    let x = (-width / 2.0).trunc() as i32;
    #[allow(clippy::cast_possible_truncation)]
    let y = (-height / 2.0).trunc() as i32;

    Some(Placement {
        x,
        y,
        width: width as f32,
        height: height as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn fit_or_panic(vw: f32, vh: f32, iw: f32, ih: f32) -> Placement {
        fit(vw, vh, iw, ih).expect("expected a placement for positive dimensions")
    }

    #[test]
    fn wide_image_in_narrower_viewport_is_width_bound() {
        // Viewport 800×600 (1.333), image 1920×1080 (1.778)
        let p = fit_or_panic(800.0, 600.0, 1920.0, 1080.0);
        assert_eq!(p.width, 800.0);
        assert!((p.height - 450.0).abs() < EPSILON);
        assert_eq!(p.x, -400);
        assert_eq!(p.y, -225);
    }

    #[test]
    fn equal_ratios_take_width_bound_branch() {
        // Viewport 800×600 and image 640×480 share the 4:3 ratio.
        let p = fit_or_panic(800.0, 600.0, 640.0, 480.0);
        assert_eq!(p.width, 800.0);
        assert!((p.height - 600.0).abs() < EPSILON);
        assert_eq!(p.x, -400);
        assert_eq!(p.y, -300);
    }

    #[test]
    fn portrait_viewport_pillarboxes_wide_image() {
        // Viewport 600×800 (0.75), image 1920×1080 (1.778)
        let p = fit_or_panic(600.0, 800.0, 1920.0, 1080.0);
        assert_eq!(p.width, 600.0);
        assert!((p.height - 337.5).abs() < EPSILON);
        assert_eq!(p.x, -300);
        // trunc(-168.75) drops the fraction toward zero
        assert_eq!(p.y, -168);
    }

    #[test]
    fn tall_image_in_wider_viewport_is_height_bound() {
        // Viewport 1920×1080 (1.778), image 600×800 (0.75)
        let p = fit_or_panic(1920.0, 1080.0, 600.0, 800.0);
        assert_eq!(p.height, 1080.0);
        assert!((p.width - 810.0).abs() < EPSILON);
        assert_eq!(p.x, -405);
        assert_eq!(p.y, -540);
    }

    #[test]
    fn zero_image_produces_no_placement() {
        assert_eq!(fit(800.0, 600.0, 0.0, 0.0), None);
        assert_eq!(fit(800.0, 600.0, 0.0, 1080.0), None);
        assert_eq!(fit(800.0, 600.0, 1920.0, 0.0), None);
    }

    #[test]
    fn zero_viewport_produces_no_placement() {
        assert_eq!(fit(0.0, 600.0, 1920.0, 1080.0), None);
        assert_eq!(fit(800.0, 0.0, 1920.0, 1080.0), None);
    }

    #[test]
    fn placement_preserves_aspect_ratio() {
        let cases = [
            (800.0, 600.0, 1920.0, 1080.0),
            (600.0, 800.0, 1920.0, 1080.0),
            (1024.0, 768.0, 640.0, 480.0),
            (333.0, 777.0, 1280.0, 720.0),
            (777.0, 333.0, 720.0, 1280.0),
        ];
        for (vw, vh, iw, ih) in cases {
            let p = fit_or_panic(vw, vh, iw, ih);
            let expected_ratio = iw / ih;
            assert!(
                (p.width / p.height - expected_ratio).abs() < EPSILON,
                "ratio broken for viewport {}x{}, image {}x{}",
                vw,
                vh,
                iw,
                ih
            );
        }
    }

    #[test]
    fn placement_never_exceeds_viewport_and_binds_one_axis() {
        let cases = [
            (800.0_f32, 600.0_f32, 1920.0_f32, 1080.0_f32),
            (600.0, 800.0, 1920.0, 1080.0),
            (101.0, 97.0, 640.0, 480.0),
            (97.0, 101.0, 480.0, 640.0),
        ];
        for (vw, vh, iw, ih) in cases {
            let p = fit_or_panic(vw, vh, iw, ih);
            assert!(p.width <= vw + EPSILON);
            assert!(p.height <= vh + EPSILON);
            assert!(
                p.width == vw || p.height == vh,
                "no binding axis for viewport {}x{}, image {}x{}",
                vw,
                vh,
                iw,
                ih
            );
        }
    }

    #[test]
    fn placement_is_centered_within_truncation_bias() {
        let cases = [
            (801.0_f32, 601.0_f32, 1919.0_f32, 1079.0_f32),
            (640.0, 480.0, 333.0, 111.0),
            (555.0, 777.0, 999.0, 333.0),
        ];
        for (vw, vh, iw, ih) in cases {
            let p = fit_or_panic(vw, vh, iw, ih);
            assert!((p.x as f32 + p.width / 2.0).abs() < 1.0);
            assert!((p.y as f32 + p.height / 2.0).abs() < 1.0);
        }
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        // width 601 → -300.5 truncates to -300, not -301
        let p = fit_or_panic(601.0, 601.0, 100.0, 100.0);
        assert_eq!(p.x, -300);
        assert_eq!(p.y, -300);
    }
}
