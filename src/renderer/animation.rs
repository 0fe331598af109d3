//! Frame-based sprite animation

/// Looping flip-book over `frame_count` frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub frame_duration: f32,
    pub frame_count: usize,
}

impl Animation {
    pub fn new(frame_duration: f32, frame_count: usize) -> Self {
        Self {
            frame_duration,
            frame_count,
        }
    }

    /// Index of the frame shown `elapsed` seconds in, wrapping around
    pub fn key_frame(&self, elapsed: f32) -> usize {
        if self.frame_count <= 1 || self.frame_duration <= 0.0 {
            return 0;
        }
        let index = (elapsed.max(0.0) / self.frame_duration) as usize;
        index % self.frame_count
    }
}
