//! Tests for color assignment and hex conversion.

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::color::*;
    use crate::error::VizError;
    use crate::types::Label;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_distinct_labels_get_distinct_colors() {
        let labels: Vec<Label> = vec![2, 0, 1, 0, 2, 1, 1];
        let assignment = assign_colors(&labels, &ColorScheme::default(), &mut rng(1)).unwrap();

        let distinct: BTreeSet<Rgb> = assignment.by_label().values().copied().collect();
        assert_eq!(distinct.len(), 3);

        // every point carries exactly its label's color
        for (point, label) in assignment.per_point().iter().zip(&labels) {
            assert_eq!(*point, assignment.color_of(*label).unwrap());
        }
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let labels: Vec<Label> = vec![5, 3, 3, 8, 5];
        let a = assign_colors(&labels, &ColorScheme::default(), &mut rng(42)).unwrap();
        let b = assign_colors(&labels, &ColorScheme::default(), &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_exhausted() {
        let labels: Vec<Label> = vec![0, 1, 2];
        let scheme = ColorScheme::random_from(vec![[1, 2, 3], [4, 5, 6]]);
        let err = assign_colors(&labels, &scheme, &mut rng(0)).unwrap_err();
        assert!(matches!(
            err,
            VizError::PaletteExhausted {
                unique: 3,
                capacity: 2,
            }
        ));
    }

    #[test]
    fn test_explicit_scheme_lookup() {
        let mut mapping = BTreeMap::new();
        mapping.insert(0, [255, 0, 0]);
        mapping.insert(1, [0, 255, 0]);
        let scheme = ColorScheme::explicit(mapping);

        let assignment = assign_colors(&[0, 1, 1], &scheme, &mut rng(0)).unwrap();
        assert_eq!(assignment.per_point(), &[[255, 0, 0], [0, 255, 0], [0, 255, 0]]);
    }

    #[test]
    fn test_explicit_scheme_must_cover_labels() {
        let mut mapping = BTreeMap::new();
        mapping.insert(0, [255, 0, 0]);
        let scheme = ColorScheme::explicit(mapping);

        let err = assign_colors(&[0, 1], &scheme, &mut rng(0)).unwrap_err();
        assert!(matches!(err, VizError::ColorFormat { .. }));
    }

    #[test]
    fn test_unit_scale_projection() {
        let mut mapping = BTreeMap::new();
        mapping.insert(0, [255, 0, 51]);
        let assignment =
            assign_colors(&[0], &ColorScheme::explicit(mapping), &mut rng(0)).unwrap();

        let unit = assignment.per_point_unit();
        assert!((unit[0][0] - 1.0).abs() < 1e-6);
        assert!((unit[0][1] - 0.0).abs() < 1e-6);
        assert!((unit[0][2] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hex_formatting() {
        assert_eq!(rgb_to_hex([31, 119, 180]), "#1f77b4");
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
        assert_eq!(rgb_to_hex([255, 255, 255]), "#ffffff");
        assert_eq!(
            rgb_to_hex_batch(&[[255, 0, 0], [0, 0, 255]]),
            vec!["#ff0000", "#0000ff"]
        );
    }

    #[test]
    fn test_hex_round_trip() {
        for c in [[0, 0, 0], [255, 255, 255], [31, 119, 180], [1, 2, 3]] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(c)).unwrap(), c);
        }
        for c in TABLEAU20 {
            assert_eq!(hex_to_rgb(&rgb_to_hex(c)).unwrap(), c);
        }
    }

    #[test]
    fn test_hex_shorthand() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), [0xaa, 0xbb, 0xcc]);
        assert_eq!(hex_to_rgb("fff").unwrap(), [255, 255, 255]);
    }

    #[test]
    fn test_hex_malformed() {
        for bad in ["#abcd", "", "#12345", "#gggggg", "not a color"] {
            let err = hex_to_rgb(bad).unwrap_err();
            assert!(matches!(err, VizError::ColorFormat { .. }), "{bad:?}");
        }
    }
}
