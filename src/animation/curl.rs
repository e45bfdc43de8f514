//! Page curl: per-joint bend/fold targets for one page and the per-frame
//! damping that moves the chain toward them.
//!
//! The chain splits in two halves. Joints near the spine follow an inside
//! curve, joints toward the free edge follow a softer counter-curve and pick
//! up a fold while the page is turning. On top of that a turning curve adds
//! motion along the whole chain during the turn window and fades back out
//! once the turn completes.
//!
//! A book shut on either cover does not curl: the root joint takes the full
//! rotation and every other joint lies flat.

use std::f32::consts::{FRAC_PI_2, PI};

use web_time::Instant;

use super::damping::{damp_angle, lerp};
use crate::options::CurlOptions;
use crate::skeleton::JointChain;

const INSIDE_FREQUENCY: f32 = 0.2;
const INSIDE_PHASE: f32 = 0.25;
const OUTSIDE_FREQUENCY: f32 = 0.32;
const OUTSIDE_PHASE: f32 = 0.09;
const FOLD_PHASE: f32 = 0.5;

/// Per-frame inputs for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurlInput {
    /// Page lies before the current page.
    pub opened: bool,
    /// Book is shut on either cover.
    pub book_closed: bool,
    /// Page index in the book.
    pub page_number: usize,
    /// Pointer is over the page.
    pub highlighted: bool,
}

/// Target rotation of one joint (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointTarget {
    /// Rotation about the joint's y axis.
    pub bend: f32,
    /// Rotation about the joint's x axis.
    pub fold: f32,
}

/// Whole-page rotation: ±90° depending on side, plus a small per-page
/// fan-out while the book lies open.
pub fn target_rotation(
    opened: bool,
    book_closed: bool,
    page_number: usize,
    stagger_deg: f32,
) -> f32 {
    let base = if opened { -FRAC_PI_2 } else { FRAC_PI_2 };
    if book_closed {
        base
    } else {
        base + (page_number as f32 * stagger_deg).to_radians()
    }
}

/// Everything needed to shape the chain for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurlPose {
    /// Whole-page rotation from [`target_rotation`].
    pub rotation: f32,
    /// Eased turn progress; peaks mid-turn.
    pub turning_ease: f32,
    /// Book shut on either cover.
    pub book_closed: bool,
}

impl CurlPose {
    /// Target for joint `index` of a chain with `chain_len` joints.
    pub fn joint_target(
        &self,
        index: usize,
        chain_len: usize,
        options: &CurlOptions,
    ) -> JointTarget {
        if self.book_closed {
            return if index == 0 {
                JointTarget {
                    bend: self.rotation,
                    fold: 0.0,
                }
            } else {
                JointTarget::default()
            };
        }

        let i = index as f32;
        let span = PI / chain_len.max(1) as f32;
        let spine = index < options.spine_joints;
        let r = self.rotation;

        let inside = if spine {
            (i * INSIDE_FREQUENCY + INSIDE_PHASE).sin()
        } else {
            0.0
        };
        let outside = if spine {
            0.0
        } else {
            (i * OUTSIDE_FREQUENCY + OUTSIDE_PHASE).cos()
        };
        let turning = (i * span * self.turning_ease).sin();

        let bend = options.inside_curve_strength * inside * r
            - options.outside_curve_strength * outside * r
            + options.turning_curve_strength * turning * r;

        let fold_base = (r.sin() * options.fold_deg).to_radians();
        let fold_intensity = if index > options.spine_joints {
            (i * span - FOLD_PHASE).sin() * self.turning_ease
        } else {
            0.0
        };

        JointTarget {
            bend,
            fold: fold_base * fold_intensity,
        }
    }
}

/// Per-page animation state carried across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCurlAnimator {
    /// When the opened flag last flipped; `None` before the first flip.
    turned_at: Option<Instant>,
    last_opened: bool,
    emissive: f32,
}

impl PageCurlAnimator {
    /// State for a page that starts on the given side. No turn is in
    /// progress.
    pub fn new(opened: bool) -> Self {
        Self {
            turned_at: None,
            last_opened: opened,
            emissive: 0.0,
        }
    }

    /// Opened flag seen on the previous frame.
    pub fn last_opened(&self) -> bool {
        self.last_opened
    }

    /// When the page last changed side.
    pub fn turned_at(&self) -> Option<Instant> {
        self.turned_at
    }

    /// Current emissive highlight intensity.
    pub fn emissive(&self) -> f32 {
        self.emissive
    }

    /// Raw turn progress in `[0, 1]`; 1 once the window has passed or
    /// before any turn.
    pub fn turning_progress(&self, now: Instant, options: &CurlOptions) -> f32 {
        let Some(turned_at) = self.turned_at else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(turned_at).as_secs_f32();
        let window = options.turn_duration_ms.max(1) as f32 / 1000.0;
        (elapsed / window).clamp(0.0, 1.0)
    }

    /// Record a side change and build this frame's pose.
    pub fn pose(
        &mut self,
        input: &CurlInput,
        now: Instant,
        options: &CurlOptions,
    ) -> CurlPose {
        if input.opened != self.last_opened {
            self.turned_at = Some(now);
            self.last_opened = input.opened;
        }
        let progress = self.turning_progress(now, options);
        CurlPose {
            rotation: target_rotation(
                input.opened,
                input.book_closed,
                input.page_number,
                options.page_stagger_deg,
            ),
            turning_ease: options.turn_easing.evaluate(progress),
            book_closed: input.book_closed,
        }
    }

    /// Advance one frame: ease the highlight and damp every joint toward
    /// its target. `delta` is seconds since the previous frame.
    ///
    /// Without a chain (mesh not built yet, or disposed) nothing happens
    /// and the next frame tries again. Returns the pose the chain was
    /// damped toward, or `None` when there was no chain.
    pub fn update(
        &mut self,
        chain: Option<&mut JointChain>,
        input: &CurlInput,
        options: &CurlOptions,
        now: Instant,
        delta: f32,
    ) -> Option<CurlPose> {
        let chain = chain?;

        let highlight = if input.highlighted {
            options.highlight_intensity
        } else {
            0.0
        };
        self.emissive = lerp(self.emissive, highlight, options.highlight_lerp);

        let pose = self.pose(input, now, options);
        let len = chain.len();
        for (i, joint) in chain.joints_mut().iter_mut().enumerate() {
            let target = pose.joint_target(i, len, options);
            joint.bend =
                damp_angle(joint.bend, target.bend, options.bend_smoothing, delta);
            joint.fold =
                damp_angle(joint.fold, target.fold, options.fold_smoothing, delta);
        }
        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn chain() -> JointChain {
        JointChain::new(30, 1.88 / 30.0)
    }

    /// Run `frames` frames at 60 Hz starting at `start`.
    fn run(
        animator: &mut PageCurlAnimator,
        chain: &mut JointChain,
        input: &CurlInput,
        start: Instant,
        frames: u32,
    ) -> Instant {
        let opts = CurlOptions::default();
        let mut now = start;
        for _ in 0..frames {
            now += Duration::from_secs_f32(DT);
            let _ = animator.update(Some(&mut *chain), input, &opts, now, DT);
        }
        now
    }

    #[test]
    fn target_rotation_sides_and_stagger() {
        assert_eq!(target_rotation(true, true, 3, 0.8), -FRAC_PI_2);
        assert_eq!(target_rotation(false, true, 3, 0.8), FRAC_PI_2);
        let open = target_rotation(true, false, 5, 0.8);
        assert!((open - (-FRAC_PI_2 + 4f32.to_radians())).abs() < 1e-6);
    }

    #[test]
    fn turning_ease_endpoints_and_peak() {
        let opts = CurlOptions::default();
        let mut animator = PageCurlAnimator::new(false);
        let t0 = Instant::now();
        let input = CurlInput {
            opened: true,
            ..CurlInput::default()
        };

        let start = animator.pose(&input, t0, &opts);
        assert_eq!(start.turning_ease, 0.0);

        let mid = animator.pose(&input, t0 + ms(200), &opts);
        assert!((mid.turning_ease - 1.0).abs() < 1e-5);

        let end = animator.pose(&input, t0 + ms(400), &opts);
        assert!(end.turning_ease.abs() < 1e-5);

        let later = animator.pose(&input, t0 + ms(5_000), &opts);
        assert!(later.turning_ease.abs() < 1e-5);
    }

    #[test]
    fn progress_clamped_and_settled_before_first_turn() {
        let opts = CurlOptions::default();
        let animator = PageCurlAnimator::new(true);
        assert_eq!(animator.turning_progress(Instant::now(), &opts), 1.0);
    }

    #[test]
    fn flip_is_detected_once() {
        let opts = CurlOptions::default();
        let mut animator = PageCurlAnimator::new(false);
        let t0 = Instant::now();
        let input = CurlInput {
            opened: true,
            ..CurlInput::default()
        };
        let _ = animator.pose(&input, t0, &opts);
        let _ = animator.pose(&input, t0 + ms(100), &opts);
        assert_eq!(animator.turned_at(), Some(t0));
        assert!(animator.last_opened());
    }

    #[test]
    fn closed_book_targets_are_rigid() {
        let opts = CurlOptions::default();
        let pose = CurlPose {
            rotation: FRAC_PI_2,
            turning_ease: 0.7,
            book_closed: true,
        };
        let root = pose.joint_target(0, 31, &opts);
        assert_eq!(root.bend, FRAC_PI_2);
        assert_eq!(root.fold, 0.0);
        for i in 1..31 {
            assert_eq!(pose.joint_target(i, 31, &opts), JointTarget::default());
        }
    }

    #[test]
    fn closed_book_chain_settles_flat() {
        let mut animator = PageCurlAnimator::new(false);
        let mut chain = chain();
        let input = CurlInput {
            opened: false,
            book_closed: true,
            page_number: 0,
            highlighted: false,
        };
        let _ = run(&mut animator, &mut chain, &input, Instant::now(), 600);
        let joints = chain.joints();
        assert!((joints[0].bend - FRAC_PI_2).abs() < 1e-3);
        assert!(joints[1..].iter().all(|j| j.bend.abs() < 1e-3));
        assert!(joints.iter().all(|j| j.fold.abs() < 1e-3));
    }

    #[test]
    fn open_targets_follow_curve_formulas() {
        let opts = CurlOptions::default();
        let r = target_rotation(true, false, 2, opts.page_stagger_deg);
        let pose = CurlPose {
            rotation: r,
            turning_ease: 0.0,
            book_closed: false,
        };

        let j0 = pose.joint_target(0, 31, &opts);
        assert!((j0.bend - 0.18 * 0.25f32.sin() * r).abs() < 1e-6);

        let j10 = pose.joint_target(10, 31, &opts);
        let outside = (10.0 * 0.32 + 0.09f32).cos();
        assert!((j10.bend + 0.05 * outside * r).abs() < 1e-6);
        // No turn in progress: no fold anywhere.
        assert_eq!(j10.fold, 0.0);
    }

    #[test]
    fn fold_only_past_spine_while_turning() {
        let opts = CurlOptions::default();
        let pose = CurlPose {
            rotation: -FRAC_PI_2,
            turning_ease: 1.0,
            book_closed: false,
        };
        for i in 0..=8 {
            assert_eq!(pose.joint_target(i, 31, &opts).fold, 0.0);
        }
        let tip = pose.joint_target(20, 31, &opts);
        let expected = (-1.0f32 * 2.0).to_radians()
            * (20.0 * PI / 31.0 - 0.5).sin();
        assert!((tip.fold - expected).abs() < 1e-6);
    }

    #[test]
    fn turning_curve_adds_motion_mid_turn() {
        let opts = CurlOptions::default();
        let still = CurlPose {
            rotation: FRAC_PI_2,
            turning_ease: 0.0,
            book_closed: false,
        };
        let turning = CurlPose {
            turning_ease: 1.0,
            ..still
        };
        let a = still.joint_target(15, 31, &opts).bend;
        let b = turning.joint_target(15, 31, &opts).bend;
        assert!(b > a);
    }

    #[test]
    fn damped_bend_approaches_without_overshoot() {
        let opts = CurlOptions::default();
        let mut animator = PageCurlAnimator::new(false);
        let mut chain = chain();
        let input = CurlInput {
            book_closed: true,
            ..CurlInput::default()
        };
        let mut now = Instant::now();
        let mut prev = 0.0;
        for _ in 0..300 {
            now += Duration::from_secs_f32(DT);
            let _ = animator.update(Some(&mut chain), &input, &opts, now, DT);
            let bend = chain.joints()[0].bend;
            assert!(bend >= prev && bend <= FRAC_PI_2);
            prev = bend;
        }
    }

    #[test]
    fn missing_chain_is_noop() {
        let opts = CurlOptions::default();
        let mut animator = PageCurlAnimator::new(false);
        let input = CurlInput {
            opened: true,
            highlighted: true,
            ..CurlInput::default()
        };
        let before = animator.clone();
        let pose = animator.update(None, &input, &opts, Instant::now(), DT);
        assert!(pose.is_none());
        assert_eq!(animator, before);
    }

    #[test]
    fn update_returns_pose_it_damped_toward() {
        let opts = CurlOptions::default();
        let mut animator = PageCurlAnimator::new(false);
        let mut chain = chain();
        let input = CurlInput {
            opened: true,
            page_number: 2,
            ..CurlInput::default()
        };
        let t0 = Instant::now();
        let pose = animator
            .update(Some(&mut chain), &input, &opts, t0, DT)
            .unwrap();
        assert_eq!(pose.rotation, target_rotation(true, false, 2, 0.8));
        assert_eq!(pose, animator.pose(&input, t0, &opts));
    }

    #[test]
    fn highlight_eases_toward_intensity() {
        let mut animator = PageCurlAnimator::new(false);
        let mut chain = chain();
        let hovered = CurlInput {
            highlighted: true,
            ..CurlInput::default()
        };
        let now = run(&mut animator, &mut chain, &hovered, Instant::now(), 200);
        assert!((animator.emissive() - 0.02).abs() < 1e-4);

        let idle = CurlInput::default();
        let _ = run(&mut animator, &mut chain, &idle, now, 200);
        assert!(animator.emissive() < 1e-4);
    }
}
