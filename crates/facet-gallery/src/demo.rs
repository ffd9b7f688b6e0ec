use facet_engine::render::{RenderCtx, RenderTarget};

/// How a control is presented and manipulated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlKind {
    Slider { min: f32, max: f32, step: f32 },
    Button,
}

/// Static description of one control row in the panel.
#[derive(Debug, Copy, Clone)]
pub struct ControlSpec {
    pub label: &'static str,
    pub kind: ControlKind,
}

impl ControlSpec {
    pub const fn slider(label: &'static str, min: f32, max: f32, step: f32) -> Self {
        Self { label, kind: ControlKind::Slider { min, max, step } }
    }

    pub const fn button(label: &'static str) -> Self {
        Self { label, kind: ControlKind::Button }
    }
}

/// One gallery page.
///
/// Every page owns its own GPU resources (one pipeline, a handful of buffers)
/// and records its own render passes; there is deliberately no shared pipeline
/// machinery between pages. Control specs are static; values flow through
/// `control_value`/`set_control` so the chrome can render and edit them
/// without knowing what they mean.
pub trait Demo {
    fn title(&self) -> &'static str;

    fn controls(&self) -> &'static [ControlSpec] {
        &[]
    }

    fn control_value(&self, _index: usize) -> f32 {
        0.0
    }

    fn set_control(&mut self, _index: usize, _value: f32) {}

    /// Activates a [`ControlKind::Button`] control.
    fn press_button(&mut self, _index: usize) {}

    /// Restores every control to its default value.
    fn reset_controls(&mut self) {}

    fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>);
}
