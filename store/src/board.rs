//! # Task board transitions
//!
//! The board is three fixed lanes (`todo`, `inprogress`, `completed`). The
//! drag-and-drop layer is a collaborator that only reports what happened; the
//! whole state machine is [`apply_drag`], a synchronous function over the
//! task list. Tasks are created in `todo`, never deleted, and their titles
//! never change.

use crate::models::{Task, TaskStatus};

/// Append a new task in the `todo` lane. Empty or whitespace-only titles are
/// rejected and leave the list untouched.
pub fn add_task(tasks: &mut Vec<Task>, id: String, title: &str) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return false;
    }
    tasks.push(Task {
        id,
        title: title.to_string(),
        status: TaskStatus::Todo,
    });
    true
}

/// Apply one drag gesture reported as a `(task_id, source, destination)`
/// triple. Returns whether the task's status changed.
///
/// No change happens when the drop landed outside any lane (`destination` is
/// `None`), the destination equals the source, the task is unknown, or the
/// task is already `completed` — completed tasks are not draggable in the
/// interaction layer either.
pub fn apply_drag(
    tasks: &mut [Task],
    task_id: &str,
    source: TaskStatus,
    destination: Option<TaskStatus>,
) -> bool {
    let Some(destination) = destination else {
        return false;
    };
    if destination == source || source == TaskStatus::Completed {
        return false;
    }
    match tasks.iter_mut().find(|t| t.id == task_id) {
        Some(task) if task.status == source => {
            task.status = destination;
            true
        }
        _ => false,
    }
}

/// Tasks in one lane, in insertion order.
pub fn lane(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<Task> {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "1".into(), "write report");
        add_task(&mut tasks, "2".into(), "review PR");
        tasks
    }

    #[test]
    fn new_tasks_start_in_todo() {
        let tasks = board();
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Todo));
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut tasks = Vec::new();
        assert!(!add_task(&mut tasks, "1".into(), "   "));
        assert!(!add_task(&mut tasks, "2".into(), ""));
        assert!(tasks.is_empty());
    }

    #[test]
    fn drag_moves_between_lanes() {
        let mut tasks = board();
        let moved = apply_drag(&mut tasks, "1", TaskStatus::Todo, Some(TaskStatus::InProgress));
        assert!(moved);
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
        assert_eq!(tasks[1].status, TaskStatus::Todo);
    }

    #[test]
    fn drop_outside_a_lane_is_ignored() {
        let mut tasks = board();
        assert!(!apply_drag(&mut tasks, "1", TaskStatus::Todo, None));
        assert_eq!(tasks[0].status, TaskStatus::Todo);
    }

    #[test]
    fn drop_on_source_lane_is_ignored() {
        let mut tasks = board();
        assert!(!apply_drag(&mut tasks, "1", TaskStatus::Todo, Some(TaskStatus::Todo)));
        assert_eq!(tasks[0].status, TaskStatus::Todo);
    }

    #[test]
    fn completed_tasks_cannot_be_dragged() {
        let mut tasks = board();
        apply_drag(&mut tasks, "1", TaskStatus::Todo, Some(TaskStatus::Completed));
        assert!(!apply_drag(
            &mut tasks,
            "1",
            TaskStatus::Completed,
            Some(TaskStatus::Todo)
        ));
        assert_eq!(tasks[0].status, TaskStatus::Completed);
    }

    #[test]
    fn unknown_task_is_a_noop() {
        let mut tasks = board();
        assert!(!apply_drag(&mut tasks, "99", TaskStatus::Todo, Some(TaskStatus::Completed)));
    }

    #[test]
    fn lanes_partition_in_insertion_order() {
        let mut tasks = board();
        add_task(&mut tasks, "3".into(), "ship release");
        apply_drag(&mut tasks, "2", TaskStatus::Todo, Some(TaskStatus::InProgress));

        let todo = lane(&tasks, TaskStatus::Todo);
        assert_eq!(todo.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);
        assert_eq!(lane(&tasks, TaskStatus::InProgress).len(), 1);
        assert!(lane(&tasks, TaskStatus::Completed).is_empty());
    }
}
