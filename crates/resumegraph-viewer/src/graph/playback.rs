use resumegraph_core::scene::Timing;

#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub frame: usize,
    pub playing: bool,
    from: usize,
    since_switch_ms: f32,
    held_ms: f32,
}

impl Playback {
    pub fn at_end(frames: usize) -> Self {
        let last = frames.saturating_sub(1);
        Self {
            frame: last,
            playing: false,
            from: last,
            since_switch_ms: f32::MAX,
            held_ms: 0.0,
        }
    }

    pub fn seek(&mut self, frame: usize) {
        if frame == self.frame {
            return;
        }
        self.from = self.frame;
        self.frame = frame;
        self.since_switch_ms = 0.0;
        self.held_ms = 0.0;
    }

    pub fn play(&mut self, frames: usize) {
        if frames == 0 {
            return;
        }
        if self.frame + 1 >= frames {
            self.seek(0);
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn clamp(&mut self, frames: usize) {
        let last = frames.saturating_sub(1);
        self.frame = self.frame.min(last);
        self.from = self.from.min(last);
        if frames == 0 {
            self.playing = false;
        }
    }

    pub fn tick(&mut self, dt_ms: f32, timing: &Timing, frames: usize) {
        self.since_switch_ms = (self.since_switch_ms + dt_ms).min(f32::MAX / 2.0);
        if !self.playing {
            return;
        }
        self.held_ms += dt_ms;
        if self.held_ms < timing.frame_ms as f32 {
            return;
        }
        if self.frame + 1 >= frames {
            self.playing = false;
            return;
        }
        self.seek(self.frame + 1);
    }

    pub fn blend(&self, timing: &Timing) -> (usize, usize, f32) {
        let t = if timing.transition_ms == 0 {
            1.0
        } else {
            self.since_switch_ms / timing.transition_ms as f32
        };
        (self.from, self.frame, timing.easing.apply(t))
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> Timing {
        Timing::new(100)
    }

    #[test]
    fn starts_settled_on_last_frame() {
        let p = Playback::at_end(4);
        assert_eq!(p.frame, 3);
        assert_eq!(p.blend(&timing()), (3, 3, 1.0));
    }

    #[test]
    fn play_from_end_rewinds_and_advances() {
        let mut p = Playback::at_end(3);
        p.play(3);
        assert_eq!(p.frame, 0);
        assert!(p.playing);

        p.tick(60.0, &timing(), 3);
        assert_eq!(p.frame, 0);
        p.tick(60.0, &timing(), 3);
        assert_eq!(p.frame, 1);
        let (from, to, t) = p.blend(&timing());
        assert_eq!((from, to), (0, 1));
        assert_eq!(t, 0.0);

        p.tick(100.0, &timing(), 3);
        assert_eq!(p.frame, 2);
        p.tick(100.0, &timing(), 3);
        assert_eq!(p.frame, 2);
        assert!(!p.playing, "stops at the last frame");
    }

    #[test]
    fn transition_completes_after_transition_time() {
        let mut p = Playback::at_end(5);
        p.seek(1);
        p.tick(85.0, &timing(), 5);
        let (_, _, t) = p.blend(&timing());
        assert_eq!(t, 1.0);
    }

    #[test]
    fn clamp_after_rebuild() {
        let mut p = Playback::at_end(10);
        p.clamp(4);
        assert_eq!(p.frame, 3);
        p.clamp(0);
        assert_eq!(p.frame, 0);
        p.play(0);
        assert!(!p.playing);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.0, 0.92, 0.0), 0.0);
        assert_eq!(lerp(0.0, 0.92, 1.0), 0.92);
    }
}
