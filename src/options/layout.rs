use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// Book pose for one device class.
pub struct DeviceLayout {
    /// Uniform scale while the book is open or shut on its back cover.
    pub scale: f32,
    /// Uniform scale while the book is shut on its front cover.
    pub scale_when_closed: f32,
    /// `[x, y]` position while shut on the front cover.
    pub closed: [f32; 2],
    /// `[x, y]` position while open.
    pub open: [f32; 2],
    /// `[x, y]` position while shut on the back cover.
    pub back_cover: [f32; 2],
    /// Static `[x, y]` rotation of the book group (radians).
    pub rotation: [f32; 2],
}

impl Default for DeviceLayout {
    fn default() -> Self {
        LayoutOptions::desktop_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Viewport breakpoints and the book pose per device class.
pub struct LayoutOptions {
    /// Viewports at most this wide (px) are mobile.
    #[schemars(title = "Mobile Breakpoint", range(min = 0.0, max = 4096.0))]
    pub mobile_breakpoint: f32,
    /// Viewports at most this wide (px) are tablets.
    #[schemars(title = "Tablet Breakpoint", range(min = 0.0, max = 4096.0))]
    pub tablet_breakpoint: f32,
    /// Per-frame lerp factor for position.
    #[schemars(skip)]
    pub position_lerp: f32,
    /// Per-frame lerp factor for scale.
    #[schemars(skip)]
    pub scale_lerp: f32,
    /// Mobile pose.
    #[schemars(skip)]
    pub mobile: DeviceLayout,
    /// Tablet pose.
    #[schemars(skip)]
    pub tablet: DeviceLayout,
    /// Desktop pose.
    #[schemars(skip)]
    pub desktop: DeviceLayout,
}

impl LayoutOptions {
    fn mobile_default() -> DeviceLayout {
        DeviceLayout {
            scale: 0.5,
            scale_when_closed: 0.77,
            closed: [-0.72, -0.20],
            open: [0.0, -0.3],
            back_cover: [1.0, -0.26],
            rotation: [0.25, -std::f32::consts::FRAC_PI_2],
        }
    }

    fn tablet_default() -> DeviceLayout {
        DeviceLayout {
            scale: 1.2,
            scale_when_closed: 1.44,
            closed: [-1.3, -0.23],
            open: [0.0, -0.35],
            back_cover: [1.3, -0.31],
            rotation: [0.28, -std::f32::consts::FRAC_PI_2],
        }
    }

    fn desktop_default() -> DeviceLayout {
        DeviceLayout {
            scale: 1.5,
            scale_when_closed: 1.8,
            closed: [-1.6, -0.27],
            open: [0.0, -0.4],
            back_cover: [1.6, -0.36],
            rotation: [0.30, -std::f32::consts::FRAC_PI_2],
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 480.0,
            tablet_breakpoint: 768.0,
            position_lerp: 0.03,
            scale_lerp: 0.02,
            mobile: Self::mobile_default(),
            tablet: Self::tablet_default(),
            desktop: Self::desktop_default(),
        }
    }
}
