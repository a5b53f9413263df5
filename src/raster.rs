use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Fill a rounded rectangle whose corners `(left, top)` and `(right, bottom)` are both inclusive.
///
/// The radius is clamped so the two corner arcs of the shorter side never overlap.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    radius: u32,
    color: Rgba<u8>,
) {
    if right < left || bottom < top {
        return;
    }

    let width = (right - left + 1) as u32;
    let height = (bottom - top + 1) as u32;
    let radius = radius.min((width.min(height) - 1) / 2);

    if radius == 0 {
        draw_filled_rect_mut(img, Rect::at(left, top).of_size(width, height), color);
        return;
    }

    let r = radius as i32;

    // Cross of two bands, then round off the four corners
    draw_filled_rect_mut(
        img,
        Rect::at(left, top + r).of_size(width, height - 2 * radius),
        color,
    );
    draw_filled_rect_mut(
        img,
        Rect::at(left + r, top).of_size(width - 2 * radius, height),
        color,
    );

    for (cx, cy) in [
        (left + r, top + r),
        (right - r, top + r),
        (left + r, bottom - r),
        (right - r, bottom - r),
    ] {
        draw_filled_circle_mut(img, (cx, cy), r, color);
    }
}

/// Stroke a straight segment of the given width as a filled quad centred on the segment.
///
/// Ends are square; callers that want rounded joins cap each endpoint with [`fill_dot`].
pub fn stroke_segment(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || width == 0 {
        return;
    }

    let half = width as f32 / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);

    let corner = |x: f32, y: f32| Point::new(x.round() as i32, y.round() as i32);
    let quad = [
        corner(from.0 + nx, from.1 + ny),
        corner(to.0 + nx, to.1 + ny),
        corner(to.0 - nx, to.1 - ny),
        corner(from.0 - nx, from.1 - ny),
    ];

    // draw_polygon_mut rejects an explicitly closed polygon
    if quad[0] == quad[3] {
        return;
    }
    draw_polygon_mut(img, &quad, color);
}

/// Fill a disc centred on `center`. A zero radius paints the single pixel under the centre.
pub fn fill_dot(img: &mut RgbaImage, center: (f32, f32), radius: u32, color: Rgba<u8>) {
    let cx = center.0.round() as i32;
    let cy = center.1.round() as i32;

    if radius == 0 {
        if cx >= 0 && cy >= 0 && (cx as u32) < img.width() && (cy as u32) < img.height() {
            img.put_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    draw_filled_circle_mut(img, (cx, cy), radius as i32, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, CLEAR)
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut img = blank(48);
        fill_rounded_rect(&mut img, 3, 3, 45, 45, 12, RED);

        // Corners of the bounding box lie outside the arcs
        assert_eq!(*img.get_pixel(3, 3), CLEAR);
        assert_eq!(*img.get_pixel(45, 45), CLEAR);

        // Edge midpoints and the centre are covered
        assert_eq!(*img.get_pixel(24, 3), RED);
        assert_eq!(*img.get_pixel(3, 24), RED);
        assert_eq!(*img.get_pixel(45, 24), RED);
        assert_eq!(*img.get_pixel(24, 45), RED);
        assert_eq!(*img.get_pixel(24, 24), RED);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let mut img = blank(48);
        fill_rounded_rect(&mut img, 3, 3, 45, 45, 12, RED);

        for i in 0..48 {
            for edge in [0, 1, 2, 46, 47] {
                assert_eq!(*img.get_pixel(i, edge), CLEAR);
                assert_eq!(*img.get_pixel(edge, i), CLEAR);
            }
        }
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_plain_rect() {
        let mut img = blank(10);
        fill_rounded_rect(&mut img, 2, 2, 7, 7, 0, RED);

        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(7, 7), RED);
        assert_eq!(*img.get_pixel(1, 2), CLEAR);
        assert_eq!(*img.get_pixel(8, 7), CLEAR);
    }

    #[test]
    fn test_rounded_rect_oversized_radius_is_clamped() {
        let mut img = blank(20);
        fill_rounded_rect(&mut img, 5, 5, 14, 14, 100, RED);

        assert_eq!(*img.get_pixel(9, 9), RED);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
        assert_eq!(*img.get_pixel(19, 19), CLEAR);
    }

    #[test]
    fn test_stroke_covers_segment_with_width() {
        let mut img = blank(40);
        stroke_segment(&mut img, (5.0, 20.0), (35.0, 20.0), 6, RED);

        assert_eq!(*img.get_pixel(20, 20), RED);
        assert_eq!(*img.get_pixel(20, 18), RED);
        assert_eq!(*img.get_pixel(20, 22), RED);
        assert_eq!(*img.get_pixel(20, 10), CLEAR);
        assert_eq!(*img.get_pixel(20, 30), CLEAR);
    }

    #[test]
    fn test_stroke_zero_length_draws_nothing() {
        let mut img = blank(10);
        stroke_segment(&mut img, (5.0, 5.0), (5.0, 5.0), 4, RED);

        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_dot_fills_disc() {
        let mut img = blank(20);
        fill_dot(&mut img, (10.0, 10.0), 3, RED);

        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(13, 10), RED);
        assert_eq!(*img.get_pixel(10, 7), RED);
        assert_eq!(*img.get_pixel(14, 10), CLEAR);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
    }

    #[test]
    fn test_dot_zero_radius_paints_one_pixel() {
        let mut img = blank(5);
        fill_dot(&mut img, (2.0, 2.0), 0, RED);

        assert_eq!(img.pixels().filter(|p| **p == RED).count(), 1);
        assert_eq!(*img.get_pixel(2, 2), RED);
    }

    #[test]
    fn test_dot_off_canvas_is_ignored() {
        let mut img = blank(5);
        fill_dot(&mut img, (-3.0, 50.0), 0, RED);

        assert!(img.pixels().all(|p| *p == CLEAR));
    }
}
