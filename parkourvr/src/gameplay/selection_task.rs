use super::TaskMeasurement;
use crate::player::Transform;

/// State of the object-selection task panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionTaskMeasure {
    pub is_task_start: bool,
    pub score_text: String,
    pub part_sum_err: f32,
    pub part_sum_time: f32,
    pub task_ui: Transform,
    pub task_start_panel_visible: bool,
}

impl SelectionTaskMeasure {
    pub fn new(task_ui: Transform) -> SelectionTaskMeasure {
        SelectionTaskMeasure {
            task_ui,
            ..SelectionTaskMeasure::default()
        }
    }

    /// Fold one selection attempt into the running totals.
    pub fn record_attempt(&mut self, error: f32, seconds: f32) {
        self.part_sum_err += error;
        self.part_sum_time += seconds;
        self.score_text = format!(
            "Error: {:.2}  Time: {:.2}s",
            self.part_sum_err, self.part_sum_time
        );
    }
}

impl TaskMeasurement for SelectionTaskMeasure {
    fn start_task(&mut self) {
        self.is_task_start = true;
    }

    fn clear_score_text(&mut self) {
        self.score_text.clear();
    }

    fn reset_accumulators(&mut self) {
        self.part_sum_err = 0.0;
        self.part_sum_time = 0.0;
    }

    fn show_start_panel(&mut self) {
        self.task_start_panel_visible = true;
    }

    fn task_ui_mut(&mut self) -> &mut Transform {
        &mut self.task_ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_then_reset() {
        let mut task = SelectionTaskMeasure::default();
        task.record_attempt(0.5, 2.0);
        task.record_attempt(0.25, 1.0);
        assert_eq!(task.part_sum_err, 0.75);
        assert_eq!(task.part_sum_time, 3.0);
        assert!(!task.score_text.is_empty());

        task.reset_accumulators();
        task.clear_score_text();
        assert_eq!(task.part_sum_err, 0.0);
        assert_eq!(task.part_sum_time, 0.0);
        assert!(task.score_text.is_empty());
    }
}
