use crate::foundation::error::{LayoutError, LayoutResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Tuning for the iterative part of the measure solver.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Allowed overflow, in layout units, of the transformed child bounds over the
    /// available size before another refinement step is taken.
    pub epsilon: f64,
    /// Upper bound on refinement steps per measure call.
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            max_iterations: 10,
        }
    }
}

impl SolverSettings {
    /// Reject a negative or non-finite epsilon and a zero iteration cap.
    pub fn validate(&self) -> LayoutResult<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(LayoutError::validation(
                "solver epsilon must be finite and >= 0",
            ));
        }
        if self.max_iterations == 0 {
            return Err(LayoutError::validation("solver max_iterations must be > 0"));
        }
        Ok(())
    }

    /// Parse settings from JSON, filling missing fields with defaults, then validate.
    pub fn from_json(s: &str) -> LayoutResult<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }
}
