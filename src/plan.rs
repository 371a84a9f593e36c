//! Action Plan Utilities
//!
//! Helper functions for rendering a goal's tasks.

use crate::models::{Goal, Task};

/// Tasks in display order: ascending `order`, ties keep server order
pub fn ordered_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    // sort_by_key is stable
    ordered.sort_by_key(|task| task.order);
    ordered
}

/// Creation date for display, calendar date only
pub fn display_date(goal: &Goal) -> String {
    match goal.created_date() {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => goal
            .created_at
            .split_once('T')
            .map(|(date, _)| date.to_string())
            .unwrap_or_else(|| goal.created_at.clone()),
    }
}

/// Badge text: `Complexity: 6/10`
pub fn complexity_label(score: i32) -> String {
    format!("Complexity: {}/10", score)
}

/// Heading counter: `3 goals tracked`
pub fn goal_count_label(count: usize) -> String {
    format!("{} goals tracked", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, order: i32) -> Task {
        Task {
            id,
            task_text: format!("Task {}", id),
            order,
            created_at: "2024-05-01T10:00:00".to_string(),
        }
    }

    fn created_at(timestamp: &str) -> Goal {
        Goal {
            id: 1,
            goal_text: "Goal".to_string(),
            complexity_score: 5,
            created_at: timestamp.to_string(),
            tasks: vec![],
        }
    }

    #[test]
    fn test_ordered_tasks() {
        let tasks = vec![
            make_task(1, 30),
            make_task(2, -5),
            make_task(3, 10),
            make_task(4, 11),
        ];

        let ordered = ordered_tasks(&tasks);

        let ids: Vec<u32> = ordered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
        assert!(ordered.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[test]
    fn test_ordered_tasks_ties_keep_server_order() {
        let tasks = vec![
            make_task(5, 2),
            make_task(6, 1),
            make_task(7, 2),
            make_task(8, 1),
        ];

        let ids: Vec<u32> = ordered_tasks(&tasks).iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![6, 8, 5, 7]);
    }

    #[test]
    fn test_ordered_tasks_leaves_input_untouched() {
        let tasks = vec![make_task(1, 2), make_task(2, 1)];
        let _ = ordered_tasks(&tasks);
        assert_eq!(tasks[0].id, 1);
    }

    fn shown(timestamp: &str) -> String {
        display_date(&created_at(timestamp))
    }

    #[test]
    fn test_display_date() {
        assert_eq!(shown("2024-05-01T10:00:00.5"), "2024-05-01");
        assert_eq!(shown("2024-05-01T23:30:00-02:00"), "2024-05-01");
        assert_eq!(shown("2024-13-45T99:00"), "2024-13-45");
        assert_eq!(shown("yesterday"), "yesterday");
    }

    #[test]
    fn test_labels() {
        assert_eq!(complexity_label(6), "Complexity: 6/10");
        assert_eq!(goal_count_label(2), "2 goals tracked");
    }
}
