//! Tests for core data types.

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::error::VizError;
    use crate::types::{AxisRange, Embedding, FeatureMatrix, GlyphStyle, RenderPayload};

    #[test]
    fn test_feature_matrix_from_rows() {
        let m = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.dims(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.iter_rows().count(), 2);
    }

    #[test]
    fn test_feature_matrix_rejects_ragged_rows() {
        let err = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            VizError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_feature_matrix_from_flat() {
        let m = FeatureMatrix::from_flat(2, 3, vec![0.0; 6]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.dims(), 3);

        let err = FeatureMatrix::from_flat(2, 3, vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, VizError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_embedding_scaled_returns_new_coordinates() {
        let e = Embedding::new(vec![[1.0, -2.0], [0.5, 4.0]]);
        let s = e.scaled(2.0);
        assert_eq!(s.points(), &[[2.0, -4.0], [1.0, 8.0]]);
        // the original is untouched
        assert_eq!(e.points(), &[[1.0, -2.0], [0.5, 4.0]]);
    }

    #[test]
    fn test_embedding_project_follows_index_order() {
        let e = Embedding::new(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
        let p = e.project(&[2, 0]);
        assert_eq!(p.points(), &[[2.0, 2.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_axis_ranges_pad_by_ten_percent() {
        let e = Embedding::new(vec![[-10.0, 5.0], [20.0, 10.0]]);
        let (xr, yr) = e.axis_ranges();
        // min - 10% * |min|, max + 10% * max
        assert!((xr.start - -11.0).abs() < 1e-6);
        assert!((xr.end - 22.0).abs() < 1e-6);
        assert!((yr.start - 4.5).abs() < 1e-6);
        assert!((yr.end - 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_render_payload_round_trips_through_json() {
        let payload = RenderPayload {
            x: vec![0.5],
            y: vec![-1.5],
            colors: vec!["#1f77b4".to_string()],
            ids: Some(vec!["sample-0".to_string()]),
            labels: vec![3],
            glyphs: GlyphStyle::circles(),
            x_range: AxisRange { start: 0.0, end: 1.0 },
            y_range: AxisRange { start: -2.0, end: 2.0 },
            images: None,
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"colors\""));
        let back: RenderPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_axis_ranges_empty_embedding() {
        let e = Embedding::new(vec![]);
        let (xr, yr) = e.axis_ranges();
        assert_eq!((xr.start, xr.end), (0.0, 0.0));
        assert_eq!((yr.start, yr.end), (0.0, 0.0));
    }
}
