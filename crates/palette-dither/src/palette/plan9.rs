//! The Plan 9 color table.
//!
//! 256 colors: the RGB cube is divided into 4×4×4 subcubes and each subcube
//! contributes 4 shades. The table order matches the classic `rgbv` layout,
//! so index `i` here is index `i` in any other Plan 9 palette.

/// The Plan 9 palette as `[R, G, B]` triples, indexed by palette index.
pub const PLAN9: [[u8; 3]; 256] = build_plan9();

const fn build_plan9() -> [[u8; 3]; 256] {
    let mut colors = [[0u8; 3]; 256];
    let mut r: i32 = 0;
    while r < 4 {
        let mut v: i32 = 0;
        while v < 4 {
            let base = (r * 64 + v * 16) as usize;
            // Entries within a 16-block are rotated by (v - r).
            let mut j = v - r;
            let mut g: i32 = 0;
            while g < 4 {
                let mut b: i32 = 0;
                while b < 4 {
                    let mut den = r;
                    if g > den {
                        den = g;
                    }
                    if b > den {
                        den = b;
                    }
                    let rgb = if den == 0 {
                        let c = (0x11 * v) as u8;
                        [c, c, c]
                    } else {
                        let num = 17 * (4 * den + v);
                        [
                            (r * num / den) as u8,
                            (g * num / den) as u8,
                            (b * num / den) as u8,
                        ]
                    };
                    colors[base + (j & 0x0f) as usize] = rgb;
                    b += 1;
                    j += 1;
                }
                g += 1;
            }
            v += 1;
        }
        r += 1;
    }
    colors
}
