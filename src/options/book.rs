use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Book", inline)]
#[serde(default)]
/// Page dimensions and joint-chain resolution.
pub struct BookOptions {
    /// Page width along the long (curling) axis, spine to free edge.
    #[schemars(title = "Page Width", range(min = 0.1, max = 10.0), extend("step" = 0.01))]
    pub page_width: f32,
    /// Page height.
    #[schemars(title = "Page Height", range(min = 0.1, max = 10.0), extend("step" = 0.01))]
    pub page_height: f32,
    /// Page thickness; also the z spacing between stacked pages.
    #[schemars(title = "Page Depth", range(min = 0.0001, max = 0.1), extend("step" = 0.0005))]
    pub page_depth: f32,
    /// Rigid segments per page; the joint chain has one more joint.
    #[schemars(title = "Segments", range(min = 1, max = 128))]
    pub page_segments: usize,
    /// Mesh subdivisions along the page height (no joints).
    #[schemars(skip)]
    pub height_segments: usize,
}

impl BookOptions {
    /// Width of one rigid segment.
    pub fn segment_width(&self) -> f32 {
        self.page_width / self.page_segments.max(1) as f32
    }

    /// Joints per page chain (`segments + 1`).
    pub fn joint_count(&self) -> usize {
        self.page_segments + 1
    }
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            page_width: 1.88,
            page_height: 1.32,
            page_depth: 0.003,
            page_segments: 30,
            height_segments: 2,
        }
    }
}
