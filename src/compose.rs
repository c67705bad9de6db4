// Puts the card together for display.
// Visual: prize face underneath, pink cover on top wherever the mask is
// still opaque; after the reveal the remaining cover fades away while the
// prize box fades in.

use crate::error::Error;
use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, Mask};

/// How far the post-reveal animations have run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// 1 = cover fully drawn, 0 = gone.
    pub cover_opacity: f32,
    /// 0 = hidden face, 1 = face with the prize box.
    pub prize_opacity: f32,
}

impl Fade {
    pub const COVERED: Fade = Fade { cover_opacity: 1.0, prize_opacity: 0.0 };

    /// Fade state `elapsed_ms` after the reveal: cover out over `cover_ms`,
    /// prize in over `prize_ms`.
    pub fn after_reveal(elapsed_ms: f32, cover_ms: f32, prize_ms: f32) -> Self {
        let ramp = |total: f32| if total <= 0.0 { 1.0 } else { (elapsed_ms / total).clamp(0.0, 1.0) };
        Fade { cover_opacity: 1.0 - ramp(cover_ms), prize_opacity: ramp(prize_ms) }
    }
}

/// Blend everything into `screen`. All buffers must share one size.
pub fn compose_card(
    screen: &mut FrameBuffer,
    hidden_face: &FrameBuffer,
    shown_face: &FrameBuffer,
    cover: &FrameBuffer,
    mask: &Mask,
    fade: Fade,
    lut: &GammaLut,
) -> Result<(), Error> {
    let n = screen.width * screen.height;
    let same = |w: usize, h: usize| w == screen.width && h == screen.height;
    if !same(hidden_face.width, hidden_face.height)
        || !same(shown_face.width, shown_face.height)
        || !same(cover.width, cover.height)
        || !same(mask.width, mask.height)
        || screen.pixels.len() != n
    {
        return Err(Error::Render(format!(
            "compose_card: expected {}x{} for every layer",
            screen.width, screen.height
        )));
    }

    for i in 0..n {
        let (h, s) = (hidden_face.pixels[i], shown_face.pixels[i]);
        let base = if h == s { h } else { lut.mix(h, s, fade.prize_opacity) };

        let a = mask.alpha[i] as f32 / 255.0 * fade.cover_opacity;
        screen.pixels[i] = lut.mix(base, cover.pixels[i], a);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACE: u32 = 0x00_11_11_11;
    const PRIZE: u32 = 0x00_EE_00_00;
    const COVER: u32 = 0x00_FD_A4_AF;

    fn layers() -> (FrameBuffer, FrameBuffer, FrameBuffer, Mask) {
        let hidden = FrameBuffer::filled(2, 1, FACE);
        let mut shown = hidden.clone();
        shown.pixels[1] = PRIZE;
        let cover = FrameBuffer::filled(2, 1, COVER);
        let mut mask = Mask::opaque(2, 1);
        mask.alpha[1] = 0;
        (hidden, shown, cover, mask)
    }

    #[test]
    fn cover_shows_where_mask_is_opaque() {
        let (hidden, shown, cover, mask) = layers();
        let mut screen = FrameBuffer::filled(2, 1, 0);
        compose_card(&mut screen, &hidden, &shown, &cover, &mask, Fade::COVERED, &GammaLut::new()).unwrap();
        assert_eq!(screen.pixels, vec![COVER, FACE]);
    }

    #[test]
    fn finished_fade_shows_the_prize_everywhere() {
        let (hidden, shown, cover, mask) = layers();
        let mut screen = FrameBuffer::filled(2, 1, 0);
        let fade = Fade::after_reveal(5_000.0, 1_000.0, 700.0);
        compose_card(&mut screen, &hidden, &shown, &cover, &mask, fade, &GammaLut::new()).unwrap();
        assert_eq!(screen.pixels, vec![FACE, PRIZE]);
    }

    #[test]
    fn fade_ramps() {
        let f = Fade::after_reveal(350.0, 1_000.0, 700.0);
        assert!((f.cover_opacity - 0.65).abs() < 1e-6);
        assert!((f.prize_opacity - 0.5).abs() < 1e-6);
        assert_eq!(Fade::after_reveal(0.0, 1_000.0, 700.0), Fade::COVERED);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let (hidden, shown, cover, mask) = layers();
        let mut screen = FrameBuffer::filled(3, 1, 0);
        let err = compose_card(&mut screen, &hidden, &shown, &cover, &mask, Fade::COVERED, &GammaLut::new());
        assert!(matches!(err, Err(Error::Render(_))));
    }
}
