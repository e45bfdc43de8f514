//! Which navigation stops a pagination strip shows, and their labels.

/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// Navigates to this page index.
    Page(usize),
    /// Gap marker between non-adjacent stops.
    Ellipsis,
}

/// Strips with at most this many stops show all of them.
pub const MAX_UNWINDOWED: usize = 7;

/// Stops to show for `count` navigable stops with `current` selected.
///
/// Long strips keep the first and last stop plus a window around the
/// selection, with ellipses marking the gaps.
pub fn visible_stops(current: usize, count: usize) -> Vec<Stop> {
    if count <= MAX_UNWINDOWED {
        return (0..count).map(Stop::Page).collect();
    }

    let last = count - 1;
    let current = current.min(last);
    if current <= 3 {
        let mut stops: Vec<Stop> = (0..=4).map(Stop::Page).collect();
        stops.extend([Stop::Ellipsis, Stop::Page(last)]);
        stops
    } else if current + 4 >= count {
        let mut stops = vec![Stop::Page(0), Stop::Ellipsis];
        stops.extend((count - 5..=last).map(Stop::Page));
        stops
    } else {
        vec![
            Stop::Page(0),
            Stop::Ellipsis,
            Stop::Page(current - 1),
            Stop::Page(current),
            Stop::Page(current + 1),
            Stop::Ellipsis,
            Stop::Page(last),
        ]
    }
}

/// Hover label for stop `index` when `last` is the back cover.
pub fn stop_label(index: usize, last: usize) -> String {
    if index == 0 {
        "Cover".to_owned()
    } else if index >= last {
        "Back Cover".to_owned()
    } else {
        format!("Page {index}")
    }
}
