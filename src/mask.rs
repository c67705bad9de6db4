// Erase + sampling over the cover Mask.
// Visual expectation: each erase punches a round hole in the pink cover;
// sampling tells how much of the card is already showing through.

use crate::types::Mask;

/// Clear (alpha = 0) every pixel whose center lies inside the disc.
/// Returns how many pixels went from covered to cleared.
/// Never raises alpha, so repeated or overlapping dabs only grow the hole.
pub fn erase_disc(mask: &mut Mask, cx: f32, cy: f32, radius: f32) -> usize {
    if !(radius > 0.0) || !cx.is_finite() || !cy.is_finite() {
        return 0;
    }
    let w = mask.width as i64;
    let h = mask.height as i64;
    let r2 = radius * radius;

    // Scan just the bounding box, clipped to the surface
    let x0 = ((cx - radius).floor() as i64).max(0);
    let x1 = ((cx + radius).ceil() as i64).min(w - 1);
    let y0 = ((cy - radius).floor() as i64).max(0);
    let y1 = ((cy + radius).ceil() as i64).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return 0;
    }

    let mut cleared = 0;
    for y in y0..=y1 {
        let dy = y as f32 + 0.5 - cy;
        let dy2 = dy * dy;
        let row = y as usize * mask.width;
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            if dx * dx + dy2 > r2 {
                continue;
            }
            let a = &mut mask.alpha[row + x as usize];
            if *a != 0 {
                *a = 0;
                cleared += 1;
            }
        }
    }
    cleared
}

/// Share of fully transparent pixels, in [0, 1].
/// An empty mask has no defined share; callers never build one.
pub fn transparent_fraction(mask: &Mask) -> f64 {
    let total = mask.alpha.len();
    if total == 0 {
        return 0.0;
    }
    let clear = mask.alpha.iter().filter(|&&a| a == 0).count();
    clear as f64 / total as f64
}
