use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Page Curl", inline)]
#[serde(default)]
/// Shape and smoothing of the page curl.
pub struct CurlOptions {
    /// Smoothing time for the bend (y) rotation.
    #[schemars(title = "Bend Smoothing", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub bend_smoothing: f32,
    /// Smoothing time for the fold (x) rotation.
    #[schemars(title = "Fold Smoothing", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub fold_smoothing: f32,
    /// Curl strength near the spine.
    #[schemars(title = "Inside Curve", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub inside_curve_strength: f32,
    /// Counter-curl strength toward the free edge.
    #[schemars(title = "Outside Curve", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub outside_curve_strength: f32,
    /// Extra curl while a page is mid-turn.
    #[schemars(title = "Turning Curve", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub turning_curve_strength: f32,
    /// Joints below this index belong to the spine half of the chain.
    #[schemars(skip)]
    pub spine_joints: usize,
    /// Length of the turn window (milliseconds).
    #[schemars(title = "Turn Duration (ms)", range(min = 1, max = 5000))]
    pub turn_duration_ms: u64,
    /// Envelope applied to turn progress.
    #[schemars(skip)]
    pub turn_easing: EasingFunction,
    /// Per-page fan-out while the book is open (degrees per page index).
    #[schemars(title = "Page Stagger (deg)", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub page_stagger_deg: f32,
    /// Peak fold magnitude at the free edge (degrees).
    #[schemars(title = "Fold (deg)", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub fold_deg: f32,
    /// Emissive intensity of a hovered page.
    #[schemars(title = "Highlight", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub highlight_intensity: f32,
    /// Per-frame lerp factor toward the highlight intensity.
    #[schemars(skip)]
    pub highlight_lerp: f32,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            bend_smoothing: 0.6,
            fold_smoothing: 0.3,
            inside_curve_strength: 0.18,
            outside_curve_strength: 0.05,
            turning_curve_strength: 0.09,
            spine_joints: 8,
            turn_duration_ms: 400,
            turn_easing: EasingFunction::SineArch,
            page_stagger_deg: 0.8,
            fold_deg: 2.0,
            highlight_intensity: 0.02,
            highlight_lerp: 0.07,
        }
    }
}
