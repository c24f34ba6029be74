use crate::task::{Priority, Task};

/// One horizontal bar of the priority chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub priority: Priority,
    pub count: usize,
    /// `"<bucket> (<count>)"`, e.g. `"High (2)"`.
    pub label: String,
    /// Bar width relative to the fullest bucket, in `0.0..=1.0`.
    pub fraction: f64,
    pub color: &'static str,
}

/// Task counts per priority bucket, always over the unfiltered snapshot.
/// Unrecognized priority values are ignored; they never create a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityChart {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityChart {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut chart = Self::default();
        for task in tasks {
            match Priority::parse(&task.priority) {
                Some(Priority::High) => chart.high += 1,
                Some(Priority::Medium) => chart.medium += 1,
                Some(Priority::Low) => chart.low += 1,
                None => {}
            }
        }
        chart
    }

    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// Bars in High, Medium, Low order, normalized against the largest
    /// bucket. The divisor floors at 1 so an empty board yields zero-width
    /// bars instead of dividing by zero.
    pub fn bars(&self) -> [ChartBar; 3] {
        let max = self.high.max(self.medium).max(self.low).max(1);
        Priority::ALL.map(|priority| {
            let count = self.count(priority);
            ChartBar {
                priority,
                count,
                label: format!("{} ({count})", priority.label()),
                fraction: count as f64 / max as f64,
                color: priority.color(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PriorityChart;
    use crate::task::Task;

    fn with_priority(priority: &str) -> Task {
        Task {
            id: "x".to_string(),
            title: "t".to_string(),
            due: String::new(),
            tags: String::new(),
            priority: priority.to_string(),
            completed: false,
        }
    }

    #[test]
    fn counts_per_bucket() {
        let tasks = vec![
            with_priority("High"),
            with_priority("High"),
            with_priority("Low"),
        ];
        let chart = PriorityChart::from_tasks(&tasks);
        assert_eq!((chart.high, chart.medium, chart.low), (2, 0, 1));
    }

    #[test]
    fn bars_normalize_against_fullest_bucket() {
        let tasks = vec![
            with_priority("High"),
            with_priority("High"),
            with_priority("Low"),
        ];
        let bars = PriorityChart::from_tasks(&tasks).bars();
        assert_eq!(bars[0].fraction, 1.0);
        assert_eq!(bars[1].fraction, 0.0);
        assert_eq!(bars[2].fraction, 0.5);
        assert_eq!(bars[0].label, "High (2)");
        assert_eq!(bars[2].label, "Low (1)");
    }

    #[test]
    fn empty_board_yields_zero_width_bars() {
        let bars = PriorityChart::default().bars();
        for bar in bars {
            assert_eq!(bar.fraction, 0.0);
            assert_eq!(bar.count, 0);
        }
    }

    #[test]
    fn unrecognized_priorities_are_ignored() {
        let tasks = vec![with_priority("Urgent"), with_priority("Medium")];
        let chart = PriorityChart::from_tasks(&tasks);
        assert_eq!((chart.high, chart.medium, chart.low), (0, 1, 0));
    }

    #[test]
    fn bars_carry_fixed_bucket_colors() {
        let bars = PriorityChart::default().bars();
        assert_eq!(bars[0].color, "#e65151");
        assert_eq!(bars[1].color, "#f0ad4e");
        assert_eq!(bars[2].color, "#4caf50");
    }
}
