//! Browser bindings. The host engine renders; this side owns the page-turn
//! state and hands back joint rotations and transforms once per frame.

use js_sys::{Float32Array, Uint8Array};
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::book::{PageSequence, PhotoBook};
use crate::error::FolioError;
use crate::options::Options;
use crate::util::FrameClock;

fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Photo book driven from JavaScript.
#[wasm_bindgen]
pub struct WebPhotoBook {
    book: PhotoBook,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebPhotoBook {
    /// Build from a JSON page list (`[{ "front": .., "back": .. }]`) and an
    /// optional TOML options preset.
    #[wasm_bindgen(constructor)]
    pub fn new(
        pages_json: &str,
        options_toml: Option<String>,
    ) -> Result<WebPhotoBook, JsValue> {
        let pages = PageSequence::from_json(pages_json).map_err(to_js)?;
        let options = match options_toml {
            Some(toml_str) => Options::from_toml(&toml_str).map_err(to_js)?,
            None => Options::default(),
        };
        let book = PhotoBook::new(pages, options).map_err(to_js)?;
        Ok(Self {
            book,
            clock: FrameClock::default(),
        })
    }

    /// Ask for a page; clamps to the book.
    pub fn set_target_page(&mut self, page: i32) {
        self.book.set_target_page(i64::from(page), Instant::now());
    }

    /// Page `index` was clicked. Returns the requested target.
    pub fn click_page(&mut self, index: usize) -> Result<usize, JsValue> {
        self.book.click_page(index, Instant::now()).map_err(to_js)
    }

    /// Pointer entered or left page `index`.
    pub fn set_highlighted(
        &mut self,
        index: usize,
        highlighted: bool,
    ) -> Result<(), JsValue> {
        self.book.set_highlighted(index, highlighted).map_err(to_js)
    }

    /// Viewport resized (CSS pixels).
    pub fn set_viewport_width(&mut self, width: f32) {
        self.book.set_viewport_width(width);
    }

    /// Advance one frame. Call from the host's render loop.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let delta = self.clock.tick(now);
        self.book.update(now, delta);
    }

    /// Lagging page index pages animate against.
    pub fn current_page(&self) -> usize {
        self.book.current_page()
    }

    /// Page the reader asked for.
    pub fn target_page(&self) -> usize {
        self.book.target_page()
    }

    /// Page `index` lies before the current page.
    pub fn is_opened(&self, index: usize) -> bool {
        self.book.is_opened(index)
    }

    /// Interleaved `[bend, fold, ...]` per joint of page `index`; empty when
    /// the page has no rig.
    pub fn joint_rotations(&self, index: usize) -> Float32Array {
        let values: Vec<f32> = self
            .book
            .chain(index)
            .map(|chain| {
                chain.joints().iter().flat_map(|j| [j.bend, j.fold]).collect()
            })
            .unwrap_or_default();
        Float32Array::from(values.as_slice())
    }

    /// Emissive intensity for page `index`'s picture faces.
    pub fn emissive(&self, index: usize) -> f32 {
        self.book.emissive(index)
    }

    /// Z offset of page `index` in book space.
    pub fn page_z_offset(&self, index: usize) -> f32 {
        self.book.page_z_offset(index)
    }

    /// `[x, y, scale, rotation_x, rotation_y]` for the book group.
    pub fn book_transform(&self) -> Float32Array {
        let t = self.book.transform();
        Float32Array::from(
            [t.position.x, t.position.y, t.scale, t.rotation.x, t.rotation.y]
                .as_slice(),
        )
    }

    /// Skin attributes of the shared page mesh as raw bytes
    /// (`u16x4` indices then `f32x4` weights per vertex).
    pub fn skin_attributes(&self) -> Uint8Array {
        let bytes: &[u8] = bytemuck::cast_slice(&self.book.geometry().skin);
        Uint8Array::from(bytes)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.book.page_count()
    }

    /// Stop stepping and release every rig.
    pub fn dispose(&mut self) {
        self.book.dispose();
        self.clock.reset();
    }
}
