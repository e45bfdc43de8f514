//! The photo book: pages, their rigs, the page sequencer and the book
//! layout, advanced together once per rendered frame.
//!
//! The host owns rendering. Each frame it calls [`PhotoBook::update`], then
//! reads back per-page joint chains, highlight intensity and z offset, plus
//! the book group transform.

pub mod geometry;
pub mod layout;
pub mod page;
pub mod pagination;

use glam::{Mat4, Vec3};
pub use geometry::{FaceGroup, PageFace, PageGeometry};
pub use layout::{BookLayout, BookPose, BookTransform, DeviceClass};
pub use page::{Page, PageContent, PageSequence};
pub use pagination::{stop_label, visible_stops, Stop};
use web_time::Instant;

use crate::animation::damping::wrap_angle;
use crate::animation::{CurlInput, PageCurlAnimator, PageIndexSequencer};
use crate::error::FolioError;
use crate::options::Options;
use crate::skeleton::JointChain;

/// Angular tolerance under which a joint counts as at rest.
const SETTLE_TOLERANCE: f32 = 1e-3;

/// Animation state owned by one page.
#[derive(Debug, Clone)]
struct PageRig {
    /// `None` while the host has no mesh for the page.
    chain: Option<JointChain>,
    animator: PageCurlAnimator,
    highlighted: bool,
    settled: bool,
}

impl PageRig {
    fn new(options: &Options) -> Self {
        Self {
            chain: Some(build_chain(options)),
            animator: PageCurlAnimator::new(false),
            highlighted: false,
            settled: false,
        }
    }
}

fn build_chain(options: &Options) -> JointChain {
    JointChain::new(options.book.page_segments, options.book.segment_width())
}

/// A book of `P` pages and everything that animates it.
#[derive(Debug, Clone)]
pub struct PhotoBook {
    pages: PageSequence,
    options: Options,
    geometry: PageGeometry,
    sequencer: PageIndexSequencer,
    rigs: Vec<PageRig>,
    layout: BookLayout,
}

impl PhotoBook {
    /// Build a book shut on its front cover.
    pub fn new(pages: PageSequence, options: Options) -> Result<Self, FolioError> {
        options.validate()?;
        let rigs = (0..pages.len()).map(|_| PageRig::new(&options)).collect();
        let sequencer =
            PageIndexSequencer::new(pages.len(), options.sequencer.clone());
        let layout = BookLayout::new(DeviceClass::default(), &options.layout);
        let geometry = PageGeometry::new(&options.book);
        log::info!(
            "book ready: {} pages, {} joints per page",
            pages.len(),
            options.book.joint_count()
        );
        Ok(Self {
            pages,
            options,
            geometry,
            sequencer,
            rigs,
            layout,
        })
    }

    // ── Navigation ──

    /// Ask for `page`. Out-of-range values clamp to `0..=P`; intermediate
    /// pages turn one at a time.
    pub fn set_target_page(&mut self, page: i64, now: Instant) {
        let _ = self.sequencer.set_target(page, now);
    }

    /// A click on page `index`: an opened page turns back to itself, an
    /// unopened one turns forward. Clears the page's highlight. Returns the
    /// requested target.
    pub fn click_page(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<usize, FolioError> {
        let target = self.pages.page(index)?.click_target(self.is_opened(index));
        self.set_target_page(target as i64, now);
        self.set_highlighted(index, false)?;
        Ok(target)
    }

    /// Pointer entered (`true`) or left (`false`) page `index`.
    pub fn set_highlighted(
        &mut self,
        index: usize,
        highlighted: bool,
    ) -> Result<(), FolioError> {
        let count = self.rigs.len();
        let rig = self
            .rigs
            .get_mut(index)
            .ok_or(FolioError::PageOutOfRange { index, count })?;
        rig.highlighted = highlighted;
        Ok(())
    }

    /// Viewport resized.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.layout.set_viewport_width(width, &self.options.layout);
    }

    // ── Per-frame ──

    /// Advance one frame. `delta` is seconds since the previous frame.
    ///
    /// Order matters: the sequencer steps first, then every page derives its
    /// opened flag from the new current page, then the layout eases.
    pub fn update(&mut self, now: Instant, delta: f32) {
        let _ = self.sequencer.tick(now);

        let current = self.sequencer.current();
        let book_closed = self.sequencer.is_book_closed();
        let curl = &self.options.curl;

        for (i, rig) in self.rigs.iter_mut().enumerate() {
            let input = CurlInput {
                opened: current > i,
                book_closed,
                page_number: i,
                highlighted: rig.highlighted,
            };
            let pose =
                rig.animator.update(rig.chain.as_mut(), &input, curl, now, delta);
            rig.settled = match (&rig.chain, pose) {
                (Some(chain), Some(pose)) => {
                    let len = chain.len();
                    chain.joints().iter().enumerate().all(|(j, joint)| {
                        let target = pose.joint_target(j, len, curl);
                        wrap_angle(joint.bend - target.bend).abs() < SETTLE_TOLERANCE
                            && wrap_angle(joint.fold - target.fold).abs()
                                < SETTLE_TOLERANCE
                    }) && pose.turning_ease.abs() < SETTLE_TOLERANCE
                }
                _ => true,
            };
        }

        self.layout.update(
            self.sequencer.target(),
            self.pages.len(),
            &self.options.layout,
        );
    }

    /// Whether the sequencer is idle and every attached page has reached its
    /// pose as of the last [`update`](Self::update).
    pub fn is_settled(&self) -> bool {
        self.sequencer.is_idle() && self.rigs.iter().all(|r| r.settled)
    }

    // ── Queries ──

    /// The pages.
    pub fn pages(&self) -> &PageSequence {
        &self.pages
    }

    /// Number of pages, `P`.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lagging page index pages animate against.
    pub fn current_page(&self) -> usize {
        self.sequencer.current()
    }

    /// Page the reader asked for.
    pub fn target_page(&self) -> usize {
        self.sequencer.target()
    }

    /// Page `index` lies before the current page.
    pub fn is_opened(&self, index: usize) -> bool {
        self.sequencer.is_opened(index)
    }

    /// Book shut on either cover.
    pub fn book_closed(&self) -> bool {
        self.sequencer.is_book_closed()
    }

    /// The page sequencer.
    pub fn sequencer(&self) -> &PageIndexSequencer {
        &self.sequencer
    }

    /// Joint chain of page `index`, if attached.
    pub fn chain(&self, index: usize) -> Option<&JointChain> {
        self.rigs.get(index).and_then(|r| r.chain.as_ref())
    }

    /// Emissive highlight of page `index`'s picture faces.
    pub fn emissive(&self, index: usize) -> f32 {
        self.rigs.get(index).map_or(0.0, |r| r.animator.emissive())
    }

    /// Whether the pointer is over page `index`.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.rigs.get(index).is_some_and(|r| r.highlighted)
    }

    /// Z offset that stacks page `index` against the current page.
    pub fn page_z_offset(&self, index: usize) -> f32 {
        (self.sequencer.current() as f32 - index as f32) * self.options.book.page_depth
    }

    /// Page root in book space.
    pub fn page_root(&self, index: usize) -> Mat4 {
        Mat4::from_translation(Vec3::Z * self.page_z_offset(index))
    }

    /// Skinning matrices for page `index` in book space, if attached.
    pub fn skinning_matrices(&self, index: usize) -> Option<Vec<Mat4>> {
        self.chain(index)
            .map(|chain| chain.skinning_matrices(self.page_root(index)))
    }

    /// Book group transform.
    pub fn transform(&self) -> BookTransform {
        self.layout.transform()
    }

    /// Book layout state.
    pub fn layout(&self) -> &BookLayout {
        &self.layout
    }

    /// Shared page mesh.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    // ── Rigs and lifecycle ──

    /// Give page `index` a fresh rest-pose chain. The page's turn state is
    /// kept.
    pub fn attach_rig(&mut self, index: usize) -> Result<(), FolioError> {
        let chain = build_chain(&self.options);
        let count = self.rigs.len();
        let rig = self
            .rigs
            .get_mut(index)
            .ok_or(FolioError::PageOutOfRange { index, count })?;
        rig.chain = Some(chain);
        rig.settled = false;
        Ok(())
    }

    /// Drop page `index`'s chain. Its updates become no-ops until
    /// re-attached.
    pub fn detach_rig(&mut self, index: usize) -> Result<(), FolioError> {
        let count = self.rigs.len();
        let rig = self
            .rigs
            .get_mut(index)
            .ok_or(FolioError::PageOutOfRange { index, count })?;
        rig.chain = None;
        Ok(())
    }

    /// Replace options. A change in page size or resolution rebuilds the mesh
    /// and every attached chain.
    pub fn set_options(&mut self, options: Options) -> Result<(), FolioError> {
        options.validate()?;
        let rebuild = options.book != self.options.book;
        self.sequencer.set_options(options.sequencer.clone());
        self.options = options;
        if rebuild {
            self.geometry = PageGeometry::new(&self.options.book);
            for rig in &mut self.rigs {
                if rig.chain.is_some() {
                    rig.chain = Some(build_chain(&self.options));
                    rig.settled = false;
                }
            }
            log::debug!("page geometry rebuilt");
        }
        Ok(())
    }

    /// Stop stepping. No step fires after this returns.
    pub fn cancel(&mut self) {
        self.sequencer.cancel();
    }

    /// Tear down: stop stepping and drop every chain.
    pub fn dispose(&mut self) {
        self.sequencer.cancel();
        for rig in &mut self.rigs {
            rig.chain = None;
        }
        log::debug!("book disposed");
    }
}
