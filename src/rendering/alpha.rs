/// Color channels scaled by alpha, i.e. the pixel composited over black.
#[inline]
pub fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 3] {
    if a == 255 {
        return [r, g, b];
    }
    let a = a as u16;
    [
        ((r as u16 * a + 127) / 255) as u8,
        ((g as u16 * a + 127) / 255) as u8,
        ((b as u16 * a + 127) / 255) as u8,
    ]
}
