//! Random index for "Surprise me".

#[cfg(test)]
#[path = "dice_test.rs"]
mod dice_test;

/// Uniform index in `0..len` using `Math.random`. Returns 0 when `len` is 0
/// or outside the browser.
pub fn roll(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let index = (js_sys::Math::random() * len as f64).floor() as usize;
        index.min(len - 1)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
