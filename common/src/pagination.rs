//! Page-window math for the pagination control.

/// Number of page links shown at once.
pub const WINDOW_WIDTH: u32 = 5;

/// A contiguous, inclusive range of page numbers to expose as controls.
///
/// Derived from the current page and the total page count; never stored.
/// The window slides with the current page and clamps at both ends so the
/// first and last pages always anchor a full-width window:
///
/// - pages 1..=3 see `[1, 5]`
/// - the last three pages see `[total - 4, total]`
/// - everything in between sees `[current - 2, current + 2]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
}

impl PageWindow {
    pub fn compute(current_page: u32, total_pages: u32) -> Self {
        debug_assert!(current_page >= 1);
        debug_assert!(current_page <= total_pages);

        if total_pages <= WINDOW_WIDTH {
            return Self {
                start: 1,
                end: total_pages,
            };
        }

        if current_page <= 3 {
            Self {
                start: 1,
                end: WINDOW_WIDTH,
            }
        } else if current_page >= total_pages - 2 {
            Self {
                start: total_pages - (WINDOW_WIDTH - 1),
                end: total_pages,
            }
        } else {
            Self {
                start: current_page - 2,
                end: current_page + 2,
            }
        }
    }

    /// The page numbers inside the window, in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}
