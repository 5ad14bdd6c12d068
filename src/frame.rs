//! Per-tick frame samples from the landmark classifier
//!
//! One sample per poll tick: either "no hand" or 21 labelled 3D landmark
//! points plus a prediction label and confidence score.

/// MediaPipe hand landmark count
pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertip landmark indices, thumb to pinky
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 3D Euclidean distance to another landmark
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One poll tick's worth of classifier output
#[derive(Clone, Debug, Default)]
pub struct FrameSample {
    pub hand_present: bool,
    pub landmarks: Option<Vec<Landmark>>,
    pub label: Option<String>,
    pub confidence: Option<f32>,
}

impl FrameSample {
    /// A tick where no hand was detected
    pub fn absent() -> Self {
        Self::default()
    }

    /// A tick carrying a prediction (inference path; landmarks not needed)
    pub fn prediction(label: &str, confidence: f32) -> Self {
        Self {
            hand_present: true,
            landmarks: None,
            label: Some(label.to_string()),
            confidence: Some(confidence),
        }
    }

    /// A tick carrying landmarks only (capture path)
    pub fn landmarks_only(landmarks: Vec<Landmark>) -> Self {
        Self {
            hand_present: true,
            landmarks: Some(landmarks),
            label: None,
            confidence: None,
        }
    }

    /// Parse the bridge's flat [x0,y0,z0, x1,y1,z1, ...] landmark array.
    /// Returns None if the payload is not a whole number of points.
    pub fn landmarks_from_flat(flat: &[f32]) -> Option<Vec<Landmark>> {
        if flat.len() % 3 != 0 {
            return None;
        }
        Some(
            flat.chunks_exact(3)
                .map(|c| Landmark::new(c[0], c[1], c[2]))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_flat() {
        let flat = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let points = FrameSample::landmarks_from_flat(&flat).unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[1].y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_from_flat_ragged_rejected() {
        assert!(FrameSample::landmarks_from_flat(&[0.1, 0.2]).is_none());
    }
}
