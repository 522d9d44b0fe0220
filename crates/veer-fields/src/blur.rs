//! Clipped box-blur helpers over row-major `f32` buffers.

/// One box-blur pass with a square window of half-width `radius`.
///
/// Every output cell is the arithmetic mean of `src` over the window
/// clipped to the grid. Reads only `src`, so the result does not depend
/// on traversal order.
pub(crate) fn box_blur_pass(src: &[f32], width: usize, height: usize, radius: usize) -> Vec<f32> {
    debug_assert_eq!(src.len(), width * height);
    let mut out = vec![0.0f32; src.len()];
    for y in 0..height {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius + 1).min(height);
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius + 1).min(width);
            let mut sum = 0.0f64;
            for yy in y0..y1 {
                let row = yy * width;
                for v in &src[row + x0..row + x1] {
                    sum += f64::from(*v);
                }
            }
            let n = ((y1 - y0) * (x1 - x0)) as f64;
            out[y * width + x] = (sum / n) as f32;
        }
    }
    out
}

/// Apply [`box_blur_pass`] `passes` times, each pass over a snapshot of
/// the previous one.
pub(crate) fn box_blur(
    src: Vec<f32>,
    width: usize,
    height: usize,
    radius: usize,
    passes: u32,
) -> Vec<f32> {
    let mut buf = src;
    for _ in 0..passes {
        buf = box_blur_pass(&buf, width, height, radius);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_input_is_unchanged() {
        let src = vec![0.5f32; 20];
        let out = box_blur(src.clone(), 5, 4, 2, 2);
        assert_eq!(out, src);
    }

    #[test]
    fn zero_passes_is_identity() {
        let src: Vec<f32> = (0..9).map(|i| i as f32).collect();
        assert_eq!(box_blur(src.clone(), 3, 3, 2, 0), src);
    }

    #[test]
    fn window_is_clipped_at_corner() {
        // 3x3, radius 1: corner (0,0) averages the 2x2 block {0,1,3,4}.
        let src: Vec<f32> = (0..9).map(|i| i as f32).collect();
        let out = box_blur_pass(&src, 3, 3, 1);
        assert_eq!(out[0], 2.0);
        // Centre averages all nine values.
        assert_eq!(out[4], 4.0);
    }

    #[test]
    fn single_spike_spreads_evenly() {
        // 5x5 with a spike in the centre, radius 2: every cell's window
        // contains the centre, so each output is 1 / window size.
        let mut src = vec![0.0f32; 25];
        src[12] = 1.0;
        let out = box_blur_pass(&src, 5, 5, 2);
        assert!((out[12] - 1.0 / 25.0).abs() < 1e-7);
        assert!((out[0] - 1.0 / 9.0).abs() < 1e-7);
        assert!((out[2] - 1.0 / 15.0).abs() < 1e-7);
    }

    #[test]
    fn passes_read_from_snapshot() {
        // An in-place sweep would make the last cell depend on already
        // blurred neighbours; a snapshot pass is symmetric.
        let src = vec![1.0f32, 0.0, 0.0, 0.0, 1.0];
        let out = box_blur_pass(&src, 5, 1, 1);
        assert!((out[0] - out[4]).abs() < 1e-7);
        assert!((out[1] - out[3]).abs() < 1e-7);
    }
}
