use crate::{
    foundation::{
        core::{Affine, Size, SolverSettings},
        math::is_size_smaller,
    },
    layout::{
        bounds::compute_transformed_bounds,
        solver::{self, ArrangeOutcome, LayoutChild, MeasureOutcome},
    },
    transform::{
        affine::{is_identity_linear, normalized_linear},
        descriptor::LayoutTransform,
    },
};

/// A single-child container that lays its child out under a transform.
///
/// The host owns invalidation: setters report whether anything changed, and
/// [`LayoutTransformer::note_child_render_size`] reports when the child must be measured again.
#[derive(Clone, Debug, Default)]
pub struct LayoutTransformer {
    transform: Option<LayoutTransform>,
    matrix: Option<Affine>,
    settings: SolverSettings,
    child_actual_size: Option<Size>,
    last_arranged: Option<Size>,
}

impl LayoutTransformer {
    /// No transform, default solver settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// No transform, custom solver settings.
    pub fn with_settings(settings: SolverSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The transform as it was set.
    pub fn transform(&self) -> Option<&LayoutTransform> {
        self.transform.as_ref()
    }

    /// Current solver settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// The flattened, rounded linear map used for layout. Identity when no transform is set.
    pub fn matrix(&self) -> Affine {
        self.matrix.unwrap_or(Affine::IDENTITY)
    }

    /// Returns `true` when the transform changed and layout must be redone.
    pub fn set_transform(&mut self, transform: Option<LayoutTransform>) -> bool {
        if self.transform == transform {
            return false;
        }
        self.matrix = transform
            .as_ref()
            .map(|t| normalized_linear(t.to_affine()));
        self.transform = transform;
        self.child_actual_size = None;
        tracing::debug!(matrix = ?self.matrix, "layout transform changed");
        true
    }

    /// Returns `true` when the settings changed and layout must be redone.
    pub fn set_settings(&mut self, settings: SolverSettings) -> bool {
        if self.settings == settings {
            return false;
        }
        self.settings = settings;
        true
    }

    /// Measure the child.
    ///
    /// After [`LayoutTransformer::note_child_render_size`] asked for another pass, the child is
    /// offered its rendered size once instead of a solved size.
    pub fn measure<C>(&mut self, available: Size, child: &mut C) -> MeasureOutcome
    where
        C: LayoutChild + ?Sized,
    {
        if let Some(actual) = self.child_actual_size {
            let child_desired = child.desired_size(actual);
            let desired = compute_transformed_bounds(
                self.matrix(),
                child_desired.width,
                child_desired.height,
            );
            tracing::debug!(?actual, ?desired, "re-measured with the child's rendered size");
            return MeasureOutcome {
                desired,
                child_desired,
                child_constraint: actual,
                iterations: 0,
                converged: true,
            };
        }
        solver::measure(self.matrix, available, child, &self.settings)
    }

    /// Arrange the child and remember the size it was given.
    pub fn arrange(&mut self, final_size: Size, child_desired: Size) -> ArrangeOutcome {
        let out = solver::arrange(self.matrix, final_size, child_desired);
        self.last_arranged = Some(out.child_rect.size());
        out
    }

    /// Feed back the size the child actually rendered at after [`LayoutTransformer::arrange`].
    ///
    /// The first time the child comes out larger than it was arranged, the size is remembered
    /// for the next measure and `true` is returned; the host should measure and arrange again.
    /// Any other call clears the remembered size.
    pub fn note_child_render_size(&mut self, render: Size) -> bool {
        let Some(arranged) = self.last_arranged else {
            return false;
        };
        if is_identity_linear(self.matrix()) {
            self.child_actual_size = None;
            return false;
        }
        if self.child_actual_size.is_none() && is_size_smaller(arranged, render) {
            self.child_actual_size = Some(render);
            return true;
        }
        self.child_actual_size = None;
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/transformer.rs"]
mod tests;
