//! Cursor tracking for mouse-look

/// Turns absolute cursor positions into per-event look offsets
///
/// The first sample only primes the tracker and yields a zero offset, so the
/// camera does not jump when the cursor is first captured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    /// Create an unprimed tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets `(x, y)` since the previous cursor sample
    ///
    /// Y is inverted because window coordinates grow downwards while pitch grows
    /// upwards.
    pub fn offsets(&mut self, x: f32, y: f32) -> (f32, f32) {
        let (last_x, last_y) = self.last.unwrap_or((x, y));
        self.last = Some((x, y));
        (x - last_x, last_y - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_yields_no_movement() {
        let mut mouse = MouseLook::new();
        assert_eq!(mouse.offsets(500.0, 400.0), (0.0, 0.0));
    }

    #[test]
    fn test_offsets_invert_y() {
        let mut mouse = MouseLook::new();
        mouse.offsets(500.0, 400.0);

        // Right and up on screen: positive yaw and pitch offsets
        assert_eq!(mouse.offsets(510.0, 390.0), (10.0, 10.0));
        assert_eq!(mouse.offsets(505.0, 395.0), (-5.0, -5.0));
    }
}
