/// Fixed-step scheduler: converts variable render frame times into a whole
/// number of simulation steps at a configured rate, carrying the remainder
/// in an accumulator. Decouples flock motion from display refresh, so a
/// 144 Hz monitor does not get a faster simulation.
pub struct StepClock {
    step_interval: f32,
    accumulator: f32,
    max_steps_per_frame: u32,
}

impl StepClock {
    pub fn new(steps_per_second: f32) -> Self {
        Self {
            step_interval: 1.0 / steps_per_second,
            accumulator: 0.0,
            max_steps_per_frame: 4,
        }
    }

    /// Feed one frame's wall-clock delta, get back how many simulation steps
    /// to run now. Backlog beyond the per-frame cap is dropped on the floor
    /// so a long stall (window drag, breakpoint) cannot trigger a catch-up
    /// spiral.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step_interval && steps < self.max_steps_per_frame {
            self.accumulator -= self.step_interval;
            steps += 1;
        }
        if steps == self.max_steps_per_frame {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Forget any banked time. Called when the simulation is paused so time
    /// does not pile up behind the pause.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_full_interval_yields_one_step() {
        let mut clock = StepClock::new(60.0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn short_frames_bank_time_until_a_step_is_due() {
        let mut clock = StepClock::new(60.0);
        // 1/120 s twice adds up to one 60 Hz step
        assert_eq!(clock.advance(1.0 / 120.0), 0);
        assert_eq!(clock.advance(1.0 / 120.0), 1);
    }

    #[test]
    fn a_long_frame_yields_several_steps() {
        let mut clock = StepClock::new(60.0);
        assert_eq!(clock.advance(3.5 / 60.0), 3);
    }

    #[test]
    fn a_stall_is_capped_and_the_backlog_dropped() {
        let mut clock = StepClock::new(60.0);
        assert_eq!(clock.advance(2.0), 4);
        // backlog was discarded, the next short frame owes nothing
        assert_eq!(clock.advance(1.0 / 120.0), 0);
    }

    #[test]
    fn reset_forgets_banked_time() {
        let mut clock = StepClock::new(60.0);
        clock.advance(1.0 / 120.0);
        clock.reset();
        assert_eq!(clock.advance(1.0 / 120.0), 0);
    }

    #[test]
    fn negative_deltas_are_ignored() {
        let mut clock = StepClock::new(60.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }
}
