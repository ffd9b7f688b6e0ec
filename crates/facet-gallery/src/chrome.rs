//! In-window gallery chrome: page sidebar and the live control panel.
//!
//! Everything is drawn with the engine overlay renderers in logical pixels.
//! The chrome never interprets control values; it just edits them through the
//! [`Demo`] control interface and lets the page react.

use facet_engine::coords::{Rect, Vec2};
use facet_engine::input::{InputFrame, InputState, Key, MouseButton};
use facet_engine::overlay::{RectCmd, TextCmd};
use facet_engine::paint::Color;
use facet_engine::text::{FontId, FontSystem};

use crate::demo::{ControlKind, Demo};

const SIDEBAR_W: f32 = 220.0;
const PANEL_W: f32 = 280.0;

const PAGE_LIST_TOP: f32 = 52.0;
const PAGE_ROW_H: f32 = 28.0;

const CONTROL_TOP: f32 = 12.0;
const CONTROL_ROW_H: f32 = 42.0;

const SIDEBAR_BG: Color = Color::new(0.09, 0.10, 0.12, 0.94);
const PANEL_BG: Color = Color::new(0.09, 0.10, 0.12, 0.88);
const ROW_ACTIVE: Color = Color::new(0.18, 0.32, 0.55, 1.0);
const TRACK_BG: Color = Color::new(0.28, 0.30, 0.34, 1.0);
const TRACK_FILL: Color = Color::new(0.36, 0.56, 0.86, 1.0);
const KNOB: Color = Color::new(0.92, 0.93, 0.95, 1.0);
const KNOB_FOCUSED: Color = Color::new(1.0, 0.85, 0.4, 1.0);
const BUTTON_BG: Color = Color::new(0.24, 0.26, 0.30, 1.0);
const TEXT: Color = Color::new(0.92, 0.93, 0.95, 1.0);
const TEXT_DIM: Color = Color::new(0.60, 0.62, 0.66, 1.0);

/// What the chrome asked the application to do this frame.
#[derive(Debug, Default)]
pub struct ChromeResponse {
    pub switch_page: Option<usize>,
    pub exit: bool,
}

pub struct Chrome {
    /// Index of the slider currently being dragged.
    drag: Option<usize>,
    /// Keyboard focus for arrow-key nudging.
    focus: Option<usize>,
}

impl Chrome {
    pub fn new() -> Self {
        Self { drag: None, focus: None }
    }

    /// Forgets per-page interaction state after a page switch.
    pub fn on_page_changed(&mut self) {
        self.drag = None;
        self.focus = None;
    }

    pub fn update(
        &mut self,
        input: &InputState,
        frame: &InputFrame,
        viewport: Vec2,
        page_count: usize,
        active: usize,
        demo: &mut dyn Demo,
    ) -> ChromeResponse {
        let mut response = ChromeResponse::default();

        self.handle_keys(frame, page_count, active, demo, &mut response);
        self.handle_pointer(input, frame, viewport, page_count, demo, &mut response);

        response
    }

    fn handle_keys(
        &mut self,
        frame: &InputFrame,
        page_count: usize,
        active: usize,
        demo: &mut dyn Demo,
        response: &mut ChromeResponse,
    ) {
        if frame.key_pressed(Key::Escape) {
            response.exit = true;
        }

        for digit in 1..=page_count.min(9) as u8 {
            if frame.key_pressed(Key::Digit(digit)) {
                response.switch_page = Some(digit as usize - 1);
            }
        }

        if frame.key_pressed(Key::ArrowUp) {
            response.switch_page = Some((active + page_count - 1) % page_count);
        }
        if frame.key_pressed(Key::ArrowDown) {
            response.switch_page = Some((active + 1) % page_count);
        }

        if frame.key_pressed(Key::R) {
            demo.reset_controls();
        }

        let controls = demo.controls();
        if controls.is_empty() {
            return;
        }

        if frame.key_pressed(Key::Tab) {
            self.focus = Some(match self.focus {
                Some(i) => (i + 1) % controls.len(),
                None => 0,
            });
        }

        // Held arrows keep nudging via key repeat.
        if let Some(i) = self.focus {
            if let ControlKind::Slider { min, max, step } = controls[i].kind {
                let nudge = step.max(f32::EPSILON);
                if frame.key_pressed(Key::ArrowLeft) {
                    demo.set_control(i, snap(demo.control_value(i) - nudge, min, max, step));
                }
                if frame.key_pressed(Key::ArrowRight) {
                    demo.set_control(i, snap(demo.control_value(i) + nudge, min, max, step));
                }
            }
        }
    }

    fn handle_pointer(
        &mut self,
        input: &InputState,
        frame: &InputFrame,
        viewport: Vec2,
        page_count: usize,
        demo: &mut dyn Demo,
        response: &mut ChromeResponse,
    ) {
        if frame.button_released(MouseButton::Left) {
            self.drag = None;
        }

        let Some((px, py)) = input.pointer_pos else { return };
        let pointer = Vec2::new(px, py);
        let controls = demo.controls();

        if frame.button_pressed(MouseButton::Left) {
            for i in 0..page_count {
                if page_row(i).contains(pointer) {
                    response.switch_page = Some(i);
                    return;
                }
            }

            for (i, spec) in controls.iter().enumerate() {
                match spec.kind {
                    ControlKind::Slider { min, max, step } => {
                        let track = slider_track(viewport, i);
                        if slider_hit_area(track).contains(pointer) {
                            self.drag = Some(i);
                            self.focus = Some(i);
                            demo.set_control(i, value_from_x(track, px, min, max, step));
                            return;
                        }
                    }
                    ControlKind::Button => {
                        if button_rect(viewport, i).contains(pointer) {
                            self.focus = Some(i);
                            demo.press_button(i);
                            return;
                        }
                    }
                }
            }
        }

        if let Some(i) = self.drag {
            if input.button_down(MouseButton::Left) {
                if let Some(ControlKind::Slider { min, max, step }) =
                    controls.get(i).map(|s| s.kind)
                {
                    let track = slider_track(viewport, i);
                    demo.set_control(i, value_from_x(track, px, min, max, step));
                }
            } else {
                self.drag = None;
            }
        }
    }

    pub fn draw(
        &self,
        viewport: Vec2,
        titles: &[&'static str],
        active: usize,
        demo: &dyn Demo,
        fonts: &FontSystem,
        font: FontId,
    ) -> (Vec<RectCmd>, Vec<TextCmd>) {
        let mut rects = Vec::new();
        let mut texts = Vec::new();

        self.draw_sidebar(viewport, titles, active, &mut rects, &mut texts, font);
        self.draw_panel(viewport, demo, fonts, &mut rects, &mut texts, font);

        (rects, texts)
    }

    fn draw_sidebar(
        &self,
        viewport: Vec2,
        titles: &[&'static str],
        active: usize,
        rects: &mut Vec<RectCmd>,
        texts: &mut Vec<TextCmd>,
        font: FontId,
    ) {
        rects.push(RectCmd {
            rect: Rect::new(0.0, 0.0, SIDEBAR_W, viewport.y),
            color: SIDEBAR_BG,
        });

        texts.push(TextCmd {
            text: "facet".to_string(),
            origin: Vec2::new(16.0, 14.0),
            size: 18.0,
            color: TEXT,
            font,
        });

        for (i, title) in titles.iter().enumerate() {
            let row = page_row(i);
            if i == active {
                rects.push(RectCmd { rect: row, color: ROW_ACTIVE });
            }
            texts.push(TextCmd {
                text: format!("{}  {}", i + 1, title),
                origin: row.origin + Vec2::new(12.0, 6.0),
                size: 13.0,
                color: if i == active { TEXT } else { TEXT_DIM },
                font,
            });
        }

        texts.push(TextCmd {
            text: "digits: page   r: reset   esc: quit".to_string(),
            origin: Vec2::new(12.0, viewport.y - 24.0),
            size: 11.0,
            color: TEXT_DIM,
            font,
        });
    }

    fn draw_panel(
        &self,
        viewport: Vec2,
        demo: &dyn Demo,
        fonts: &FontSystem,
        rects: &mut Vec<RectCmd>,
        texts: &mut Vec<TextCmd>,
        font: FontId,
    ) {
        let controls = demo.controls();
        if controls.is_empty() {
            return;
        }

        let panel_x = viewport.x - PANEL_W;
        let panel_h = CONTROL_TOP + controls.len() as f32 * CONTROL_ROW_H + 8.0;
        rects.push(RectCmd {
            rect: Rect::new(panel_x, 0.0, PANEL_W, panel_h),
            color: PANEL_BG,
        });

        for (i, spec) in controls.iter().enumerate() {
            let row_y = CONTROL_TOP + i as f32 * CONTROL_ROW_H;

            match spec.kind {
                ControlKind::Slider { min, max, step } => {
                    let value = demo.control_value(i);

                    texts.push(TextCmd {
                        text: spec.label.to_string(),
                        origin: Vec2::new(panel_x + 12.0, row_y + 4.0),
                        size: 12.0,
                        color: TEXT,
                        font,
                    });

                    let value_text = format_value(value, step);
                    let tw = fonts.measure_text(&value_text, font, 12.0).x;
                    texts.push(TextCmd {
                        text: value_text,
                        origin: Vec2::new(panel_x + PANEL_W - 12.0 - tw, row_y + 4.0),
                        size: 12.0,
                        color: TEXT_DIM,
                        font,
                    });

                    let track = slider_track(viewport, i);
                    rects.push(RectCmd { rect: track, color: TRACK_BG });

                    let t = if max > min { ((value - min) / (max - min)).clamp(0.0, 1.0) } else { 0.0 };
                    rects.push(RectCmd {
                        rect: Rect::new(track.origin.x, track.origin.y, track.size.x * t, track.size.y),
                        color: TRACK_FILL,
                    });

                    let knob_x = track.origin.x + track.size.x * t - 5.0;
                    rects.push(RectCmd {
                        rect: Rect::new(knob_x, track.origin.y - 5.0, 10.0, track.size.y + 10.0),
                        color: if self.focus == Some(i) { KNOB_FOCUSED } else { KNOB },
                    });
                }

                ControlKind::Button => {
                    let button = button_rect(viewport, i);
                    rects.push(RectCmd { rect: button, color: BUTTON_BG });

                    let tw = fonts.measure_text(spec.label, font, 12.0).x;
                    texts.push(TextCmd {
                        text: spec.label.to_string(),
                        origin: Vec2::new(
                            button.origin.x + (button.size.x - tw) / 2.0,
                            button.origin.y + 6.0,
                        ),
                        size: 12.0,
                        color: TEXT,
                        font,
                    });
                }
            }
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new()
    }
}

fn page_row(i: usize) -> Rect {
    Rect::new(0.0, PAGE_LIST_TOP + i as f32 * PAGE_ROW_H, SIDEBAR_W, PAGE_ROW_H - 2.0)
}

fn slider_track(viewport: Vec2, i: usize) -> Rect {
    let row_y = CONTROL_TOP + i as f32 * CONTROL_ROW_H;
    Rect::new(viewport.x - PANEL_W + 12.0, row_y + 24.0, PANEL_W - 24.0, 6.0)
}

/// Grab area around the thin track, so the slider is easy to hit.
fn slider_hit_area(track: Rect) -> Rect {
    Rect::new(track.origin.x - 5.0, track.origin.y - 8.0, track.size.x + 10.0, track.size.y + 16.0)
}

fn button_rect(viewport: Vec2, i: usize) -> Rect {
    let row_y = CONTROL_TOP + i as f32 * CONTROL_ROW_H;
    Rect::new(viewport.x - PANEL_W + 12.0, row_y + 6.0, PANEL_W - 24.0, 26.0)
}

fn value_from_x(track: Rect, x: f32, min: f32, max: f32, step: f32) -> f32 {
    let t = ((x - track.origin.x) / track.size.x).clamp(0.0, 1.0);
    snap(min + t * (max - min), min, max, step)
}

fn snap(value: f32, min: f32, max: f32, step: f32) -> f32 {
    if step > 0.0 {
        (min + ((value - min) / step).round() * step).clamp(min, max)
    } else {
        value.clamp(min, max)
    }
}

fn format_value(value: f32, step: f32) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else if step >= 0.1 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_lands_on_step_multiples() {
        assert_eq!(snap(0.337, 0.1, 2.0, 0.1), 0.3);
        assert_eq!(snap(7.7, 3.0, 9.0, 1.0), 8.0);
        assert_eq!(snap(99.0, 3.0, 9.0, 1.0), 9.0);
    }

    #[test]
    fn track_clicks_map_endpoints_to_range_bounds() {
        let track = Rect::new(100.0, 50.0, 200.0, 6.0);
        assert_eq!(value_from_x(track, 100.0, 0.1, 2.0, 0.1), 0.1);
        assert_eq!(value_from_x(track, 300.0, 0.1, 2.0, 0.1), 2.0);
        assert_eq!(value_from_x(track, -50.0, 0.1, 2.0, 0.1), 0.1);
    }

    #[test]
    fn value_formatting_follows_step_granularity() {
        assert_eq!(format_value(5.0, 1.0), "5");
        assert_eq!(format_value(0.3, 0.1), "0.3");
        assert_eq!(format_value(0.24, 0.01), "0.24");
    }
}
