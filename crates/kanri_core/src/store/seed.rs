//! Default board contents for first launch.
//!
//! Used when a storage key is absent or unreadable, so a fresh profile
//! opens onto a working board instead of an empty screen.

use crate::model::column::Column;
use crate::model::task::{NewTask, Priority, Subtask, Task};
use chrono::NaiveDate;

/// The four starter columns.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("To Do", Some("#9aa0a6")),
        Column::new("In Progress", Some("#5f6368")),
        Column::new("Review", Some("#feca57")),
        Column::new("Done", Some("#48dbfb")),
    ]
}

/// Two sample tasks attached to the first two of `columns`.
///
/// Returns fewer tasks when the board has fewer columns.
pub fn sample_tasks(columns: &[Column]) -> Vec<Task> {
    let mut tasks = Vec::new();

    if let Some(column) = columns.first() {
        let mut planning = Task::from_new(NewTask {
            description: "Create detailed project plan and timeline for new initiative"
                .to_string(),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            tags: vec!["planning".to_string(), "project".to_string()],
            ..NewTask::new(column.id.clone(), "Project Planning")
        });
        planning.subtasks = vec![
            Subtask::new("Requirements analysis"),
            Subtask {
                completed: true,
                ..Subtask::new("Create timeline")
            },
        ];
        tasks.push(planning);
    }

    if let Some(column) = columns.get(1) {
        tasks.push(Task::from_new(NewTask {
            description: "Design modern and user-friendly interface".to_string(),
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2024, 2, 15),
            tags: vec!["design".to_string(), "frontend".to_string()],
            ..NewTask::new(column.id.clone(), "UI/UX Design")
        }));
    }

    tasks
}
