//! Geometric admission checks for training samples
//!
//! All checks must pass: structural completeness, in-frame plausibility,
//! fingertip visibility, then optional positional variety. A failed geometric
//! *computation* (as opposed to a failed check) resolves to "admit": fail-open
//! is the explicit policy, so a bad frame can never silently starve data
//! collection.

use thiserror::Error;

use crate::frame::{FrameSample, Landmark, FINGERTIPS, HAND_LANDMARK_COUNT, WRIST};

use super::position::PositionMemory;

/// A geometric check that could not be computed (distinct from a check that
/// computed "reject")
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("landmark {0} missing from sample")]
    MissingLandmark(usize),
    #[error("non-finite coordinate at landmark {0}")]
    NonFiniteCoordinate(usize),
}

/// Gate thresholds; defaults are the operative capture values
#[derive(Clone, Copy, Debug)]
pub struct QualityGateConfig {
    /// Landmarks that must fall inside the unit square
    pub min_points_in_frame: usize,
    /// Fingertip-to-wrist distance band (exclusive bounds)
    pub fingertip_min_distance: f32,
    pub fingertip_max_distance: f32,
    /// Fingertips that must sit inside the distance band
    pub min_visible_fingertips: usize,
    /// Enable the positional-variety check
    pub check_position_variety: bool,
}

impl Default for QualityGateConfig {
    fn default() -> Self {
        Self {
            min_points_in_frame: 15,
            fingertip_min_distance: 0.01,
            fingertip_max_distance: 0.6,
            min_visible_fingertips: 3,
            check_position_variety: false,
        }
    }
}

/// Admission-control predicate for training-sample capture
#[derive(Debug, Default)]
pub struct QualityGate {
    config: QualityGateConfig,
    position: PositionMemory,
    fail_open_admissions: u32,
}

impl QualityGate {
    pub fn new(config: QualityGateConfig) -> Self {
        Self {
            config,
            position: PositionMemory::new(),
            fail_open_admissions: 0,
        }
    }

    /// Samples admitted via the fail-open fallback so far
    pub fn fail_open_admissions(&self) -> u32 {
        self.fail_open_admissions
    }

    /// Clear the positional-variety memory (label change, mode switch)
    pub fn reset_position_memory(&mut self) {
        self.position.reset();
    }

    /// Decide admissibility of one candidate sample.
    pub fn admit(&mut self, sample: &FrameSample, now_ms: f64) -> bool {
        let landmarks = match &sample.landmarks {
            Some(l) => l,
            None => return false,
        };
        if landmarks.len() != HAND_LANDMARK_COUNT {
            return false;
        }

        match geometry_plausible(landmarks, &self.config) {
            Ok(false) => return false,
            Ok(true) => {}
            Err(_) => {
                // Fail open: an uncomputable check admits, never rejects
                self.fail_open_admissions += 1;
                return true;
            }
        }

        if self.config.check_position_variety {
            let wrist = landmarks[WRIST];
            self.position.check((wrist.x, wrist.y), now_ms)
        } else {
            true
        }
    }
}

/// In-frame plausibility + fingertip visibility.
///
/// Errors when a coordinate is non-finite or a required landmark is absent;
/// the caller decides what an uncomputable check means (the gate admits).
pub fn geometry_plausible(
    landmarks: &[Landmark],
    config: &QualityGateConfig,
) -> Result<bool, GeometryError> {
    for (i, point) in landmarks.iter().enumerate() {
        if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate(i));
        }
    }

    let in_frame = landmarks
        .iter()
        .filter(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y))
        .count();
    if in_frame < config.min_points_in_frame {
        return Ok(false);
    }

    let wrist = landmarks
        .get(WRIST)
        .ok_or(GeometryError::MissingLandmark(WRIST))?;
    let mut visible = 0;
    for &tip in FINGERTIPS.iter() {
        let point = landmarks
            .get(tip)
            .ok_or(GeometryError::MissingLandmark(tip))?;
        let distance = point.distance_to(wrist);
        if distance > config.fingertip_min_distance && distance < config.fingertip_max_distance {
            visible += 1;
        }
    }
    Ok(visible >= config.min_visible_fingertips)
}
