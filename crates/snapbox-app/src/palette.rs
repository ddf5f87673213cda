//! Random placement and coloring of new rectangles.

use crate::config::Extent;
use rand::Rng;
use snapbox_core::{IRect, RgbaColor};

/// A random fully opaque color.
pub fn random_color<R: Rng>(rng: &mut R) -> RgbaColor {
    RgbaColor::opaque(
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
    )
}

/// A rectangle of `size` whose origin lies inside `area`.
pub fn random_rect<R: Rng>(rng: &mut R, area: Extent, size: Extent) -> IRect {
    let x = if area.width > 0 { rng.gen_range(0..area.width) } else { 0 };
    let y = if area.height > 0 { rng.gen_range(0..area.height) } else { 0 };
    IRect::new(x, y, size.width.max(0), size.height.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_color_is_opaque_and_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let color = random_color(&mut a);
            assert_eq!(color.a, 255);
            assert_eq!(color, random_color(&mut b));
        }
    }

    #[test]
    fn test_rect_origin_within_area() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let rect = random_rect(&mut rng, Extent::new(500, 300), Extent::new(100, 100));
            assert!((0..500).contains(&rect.x));
            assert!((0..300).contains(&rect.y));
            assert_eq!((rect.width, rect.height), (100, 100));
        }
    }

    #[test]
    fn test_empty_area_places_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let rect = random_rect(&mut rng, Extent::new(0, 0), Extent::new(10, 20));
        assert_eq!(rect, IRect::new(0, 0, 10, 20));
    }
}
