//! Headless page-turn simulator.
//!
//! `folio <pages.toml> <target> [options.toml]` opens the book on its front
//! cover, asks for `target`, and steps a simulated 60 Hz clock until the
//! book has settled, logging each page step and the final pose.

use std::path::Path;
use std::process;

use folio::book::{PageSequence, PhotoBook};
use folio::options::Options;
use folio::util::FrameClock;
use folio::FolioError;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_micros(16_667);
/// Give up after a simulated minute.
const MAX_FRAMES: u32 = 60 * 60;

fn usage() -> ! {
    log::error!("Usage: folio <pages.toml> <target page> [options.toml]");
    process::exit(1);
}

fn run(pages: &Path, target: i64, options: Option<&Path>) -> Result<(), FolioError> {
    let pages = PageSequence::load(pages)?;
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let mut book = PhotoBook::new(pages, options)?;
    let mut clock = FrameClock::default();

    let mut now = Instant::now();
    let _ = clock.tick(now);
    book.set_target_page(target, now);
    log::info!(
        "target page {} (requested {target}), first step to {}",
        book.target_page(),
        book.current_page()
    );

    let mut last_page = book.current_page();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        now += FRAME;
        let delta = clock.tick(now);
        book.update(now, delta);
        frames += 1;

        if book.current_page() != last_page {
            last_page = book.current_page();
            log::info!(
                "frame {frames}: current page {last_page} ({:.0} ms)",
                frames as f32 * FRAME.as_secs_f32() * 1000.0
            );
        }
        if book.is_settled() {
            break;
        }
    }

    if book.is_settled() {
        log::info!("settled after {frames} frames");
    } else {
        log::warn!("not settled after {frames} frames");
    }

    for i in 0..book.page_count() {
        let Some(chain) = book.chain(i) else {
            continue;
        };
        let joints = chain.joints();
        let root = joints.first().map_or(0.0, |j| j.bend);
        let max_fold = joints.iter().map(|j| j.fold.abs()).fold(0.0, f32::max);
        log::info!(
            "page {i}: opened={} root bend {:.1}°, max fold {:.2}°, z {:+.4}",
            book.is_opened(i),
            root.to_degrees(),
            max_fold.to_degrees(),
            book.page_z_offset(i)
        );
        log::debug!(
            "page {i} bends: {:?}",
            joints.iter().map(|j| j.bend).collect::<Vec<_>>()
        );
    }
    let t = book.transform();
    log::info!(
        "book at ({:.3}, {:.3}) scale {:.3}",
        t.position.x,
        t.position.y,
        t.scale
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(pages) = args.next() else { usage() };
    let Some(target) = args.next() else { usage() };
    let target: i64 = match target.parse() {
        Ok(t) => t,
        Err(e) => {
            log::error!("invalid target page {target:?}: {e}");
            process::exit(1);
        }
    };
    let options = args.next();

    if let Err(e) = run(Path::new(&pages), target, options.as_deref().map(Path::new)) {
        log::error!("{e}");
        process::exit(1);
    }
}
