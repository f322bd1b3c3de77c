//! Wall-clock timing of pipeline steps

use std::time::{Duration, Instant};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    /// Stops `timer` and records it.
    pub fn record(&mut self, timer: Timer) {
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
    }

    /// Appends every step of `other` after the current ones.
    pub fn extend(&mut self, other: PipelineTimings) {
        for step in other.steps {
            self.add_step(step.name, step.duration);
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn summary(&self) -> String {
        let total = self.total_duration();
        let mut out = String::from("Pipeline Timing Summary:\n");
        out.push_str(&format!("{:-<60}\n", ""));
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            out.push_str(&format!(
                "{:<30} {:>12.3}ms ({:>5.1}%)\n",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            ));
        }
        out.push_str(&format!("{:-<60}\n", ""));
        out.push_str(&format!(
            "{:<30} {:>12.3}ms",
            "Total",
            total.as_secs_f64() * 1000.0
        ));
        out
    }

    pub fn print_summary(&self) {
        println!("\n{}", self.summary());
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("decode", Duration::from_millis(2));
        timings.add_step("effect", Duration::from_millis(5));
        timings.add_step("decode", Duration::from_millis(3));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("decode"), Some(Duration::from_millis(5)));
        assert_eq!(timings.get_step("encode"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(10));
    }

    #[test]
    fn test_record_and_extend_keep_order() {
        let mut inner = PipelineTimings::new();
        inner.record(Timer::start("effect"));

        let mut outer = PipelineTimings::new();
        outer.add_step("read_input_file", Duration::from_millis(1));
        outer.extend(inner);

        let names: Vec<_> = outer.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["read_input_file", "effect"]);
    }

    #[test]
    fn test_summary_lists_steps_and_total() {
        let mut timings = PipelineTimings::new();
        timings.add_step("encode_ppm", Duration::from_millis(4));
        let summary = timings.summary();
        assert!(summary.contains("encode_ppm"));
        assert!(summary.contains("100.0%"));
        assert!(summary.lines().last().unwrap().starts_with("Total"));
    }
}
