use facet_engine::core::{App, AppControl, FrameCtx};
use facet_engine::coords::Vec2;
use facet_engine::overlay::{RectRenderer, TextRenderer};
use facet_engine::paint::Color;
use facet_engine::text::{FontId, FontSystem};

use crate::chrome::Chrome;
use crate::demo::Demo;

const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// The gallery application: a list of pages, one active at a time, plus the
/// sidebar/control-panel chrome drawn over whatever the page renders.
pub struct GalleryApp {
    pages: Vec<Box<dyn Demo>>,
    active: usize,
    title_dirty: bool,

    chrome: Chrome,
    rect_renderer: RectRenderer,
    text_renderer: TextRenderer,
    font_system: FontSystem,
    font: FontId,
}

impl GalleryApp {
    pub fn new(pages: Vec<Box<dyn Demo>>, font_system: FontSystem, font: FontId) -> Self {
        Self {
            pages,
            active: 0,
            title_dirty: true,
            chrome: Chrome::new(),
            rect_renderer: RectRenderer::new(),
            text_renderer: TextRenderer::new(),
            font_system,
            font,
        }
    }

    fn switch_page(&mut self, index: usize) {
        if index < self.pages.len() && index != self.active {
            self.active = index;
            self.title_dirty = true;
            self.chrome.on_page_changed();
            log::info!("switched to page {}: {}", index + 1, self.pages[index].title());
        }
    }
}

impl App for GalleryApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.pages.is_empty() {
            return AppControl::Exit;
        }

        if self.title_dirty {
            ctx.window.set_title(&format!("{} - facet", self.pages[self.active].title()));
            self.title_dirty = false;
        }

        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);

        let response = self.chrome.update(
            ctx.input,
            ctx.input_frame,
            viewport,
            self.pages.len(),
            self.active,
            self.pages[self.active].as_mut(),
        );
        if response.exit {
            return AppControl::Exit;
        }
        if let Some(index) = response.switch_page {
            self.switch_page(index);
        }

        let titles: Vec<&'static str> = self.pages.iter().map(|p| p.title()).collect();
        let (rects, texts) = self.chrome.draw(
            viewport,
            &titles,
            self.active,
            self.pages[self.active].as_ref(),
            &self.font_system,
            self.font,
        );

        let GalleryApp {
            pages, active, rect_renderer, text_renderer, font_system, ..
        } = self;
        let page = pages[*active].as_mut();

        ctx.render(CLEAR, |rctx, target| {
            page.draw(rctx, target);
            rect_renderer.render(rctx, target, &rects);
            text_renderer.render(rctx, target, font_system, &texts);
        })
    }
}
