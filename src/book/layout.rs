//! Book placement on screen: device class from viewport width, and an eased
//! transform that slides the book between its closed, open and back-cover
//! poses.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::animation::damping::lerp;
use crate::options::{DeviceLayout, LayoutOptions};

/// Viewport class picked from width breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Narrow phone viewport.
    Mobile,
    /// Mid-width viewport.
    Tablet,
    /// Anything wider.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in pixels.
    pub fn from_width(width: f32, options: &LayoutOptions) -> Self {
        if width <= options.mobile_breakpoint {
            Self::Mobile
        } else if width <= options.tablet_breakpoint {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Pose table for this class.
    pub fn layout(self, options: &LayoutOptions) -> &DeviceLayout {
        match self {
            Self::Mobile => &options.mobile,
            Self::Tablet => &options.tablet,
            Self::Desktop => &options.desktop,
        }
    }
}

/// Which of the three rest poses the book is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookPose {
    /// Shut on the front cover.
    Closed,
    /// Lying open.
    Open,
    /// Shut on the back cover.
    BackCover,
}

impl BookPose {
    /// Pose for a target page in a book of `page_count` pages.
    pub fn for_page(target_page: usize, page_count: usize) -> Self {
        if target_page == 0 {
            Self::Closed
        } else if target_page >= page_count {
            Self::BackCover
        } else {
            Self::Open
        }
    }
}

/// Transform of the whole book group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookTransform {
    /// Screen-plane position.
    pub position: Vec2,
    /// Uniform scale.
    pub scale: f32,
    /// Rotation about x then y (radians).
    pub rotation: Vec2,
}

impl BookTransform {
    /// Resting transform for `pose` in `layout`.
    pub fn at_rest(pose: BookPose, layout: &DeviceLayout) -> Self {
        let (position, scale) = match pose {
            BookPose::Closed => (layout.closed, layout.scale_when_closed),
            BookPose::Open => (layout.open, layout.scale),
            BookPose::BackCover => (layout.back_cover, layout.scale),
        };
        Self {
            position: Vec2::from(position),
            scale,
            rotation: Vec2::from(layout.rotation),
        }
    }

    /// Model matrix for the book group.
    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y);
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            rotation,
            self.position.extend(0.0),
        )
    }
}

/// Eases the book transform toward the pose for the target page.
#[derive(Debug, Clone)]
pub struct BookLayout {
    device: DeviceClass,
    transform: BookTransform,
}

impl BookLayout {
    /// Layout resting closed on the front cover.
    pub fn new(device: DeviceClass, options: &LayoutOptions) -> Self {
        Self {
            device,
            transform: BookTransform::at_rest(
                BookPose::Closed,
                device.layout(options),
            ),
        }
    }

    /// Current device class.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Current transform.
    pub fn transform(&self) -> BookTransform {
        self.transform
    }

    /// Re-classify after a viewport resize. Rotation follows immediately,
    /// position and scale keep easing from where they are.
    pub fn set_viewport_width(&mut self, width: f32, options: &LayoutOptions) {
        let device = DeviceClass::from_width(width, options);
        if device != self.device {
            log::debug!("viewport {width}px: {:?} -> {device:?}", self.device);
            self.device = device;
        }
        self.transform.rotation = Vec2::from(device.layout(options).rotation);
    }

    /// One frame of easing toward the pose for `target_page`.
    pub fn update(
        &mut self,
        target_page: usize,
        page_count: usize,
        options: &LayoutOptions,
    ) {
        let pose = BookPose::for_page(target_page, page_count);
        let goal = BookTransform::at_rest(pose, self.device.layout(options));
        self.transform.position =
            self.transform.position.lerp(goal.position, options.position_lerp);
        self.transform.scale =
            lerp(self.transform.scale, goal.scale, options.scale_lerp);
        self.transform.rotation = goal.rotation;
    }
}
