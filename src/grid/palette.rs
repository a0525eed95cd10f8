use crate::core::types::ColorClass;
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

static PALETTE: Lazy<Vec<ColorClass>> = Lazy::new(|| ColorClass::iter().collect());

pub fn palette() -> &'static [ColorClass] {
    &PALETTE
}

/// 32-bit rolling string hash (`h = c + (h << 5) - h`) over UTF-16 code units.
pub fn label_hash(label: &str) -> i32 {
    label.encode_utf16().fold(0i32, |h, unit| {
        i32::from(unit).wrapping_add(h.wrapping_shl(5).wrapping_sub(h))
    })
}

/// Same label, same color. Distinct labels may collide.
pub fn color_for(label: &str) -> ColorClass {
    let idx = label_hash(label).unsigned_abs() as usize % PALETTE.len();
    PALETTE[idx]
}
