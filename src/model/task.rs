use serde::{Deserialize, Serialize};

/// Logical icon attached to a task. Rendered as a single initial on a tinted
/// block, matching the mockup's placeholder icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskIcon {
    People,
    Meditation,
    Money,
    Walk,
    Flower,
    Palette,
}

impl TaskIcon {
    /// The uppercase initial shown in the icon placeholder.
    pub fn initial(self) -> char {
        match self {
            TaskIcon::People => 'P',
            TaskIcon::Meditation => 'M',
            TaskIcon::Money => 'M',
            TaskIcon::Walk => 'W',
            TaskIcon::Flower => 'F',
            TaskIcon::Palette => 'P',
        }
    }
}

/// A single static to-do entry with display metadata. The catalog is fixed at
/// startup and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub icon: TaskIcon,
    pub title: String,
    /// Display label only, never parsed.
    pub time: String,
    pub tags: Vec<String>,
    pub completed: bool,
    pub description: String,
}

/// Error type for catalog lookups
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no such task id: {0}")]
    UnknownTask(u32),
}

/// Find a task by id in the catalog.
pub fn find_task(tasks: &[Task], id: u32) -> Result<&Task, CatalogError> {
    tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or(CatalogError::UnknownTask(id))
}

/// The built-in task list shown on the screen.
pub fn builtin_tasks() -> Vec<Task> {
    fn task(
        id: u32,
        icon: TaskIcon,
        title: &str,
        time: &str,
        tags: &[&str],
        completed: bool,
        description: &str,
    ) -> Task {
        Task {
            id,
            icon,
            title: title.to_string(),
            time: time.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            completed,
            description: description.to_string(),
        }
    }

    vec![
        task(
            1,
            TaskIcon::People,
            "Schedule a meeting with Harshit Sir",
            "8:00 AM",
            &["Habit", "Work"],
            true,
            "Important meeting with Harshit Sir to discuss project updates and future plans.",
        ),
        task(
            2,
            TaskIcon::Meditation,
            "2.5 Hours Simran and Meditation",
            "6:00 AM",
            &["Habit", "Must"],
            false,
            "Daily meditation and spiritual practice for mental clarity and peace.",
        ),
        task(
            3,
            TaskIcon::Money,
            "Save 200 Rupees Daily",
            "10:00 AM",
            &["Habit", "Must"],
            false,
            "Daily savings goal to build financial discipline and emergency fund.",
        ),
        task(
            4,
            TaskIcon::Walk,
            "Walk 10k Step Daily",
            "7:00 AM",
            &["Habit", "Important"],
            false,
            "Daily walking routine to maintain physical health and fitness.",
        ),
        task(
            5,
            TaskIcon::Flower,
            "Buy Sunflower for Mumma",
            "11:00 AM",
            &["Task", "Important"],
            false,
            "Purchase beautiful sunflowers to surprise and make Mumma happy.",
        ),
        task(
            6,
            TaskIcon::Palette,
            "Make Mandala and Colour Daily",
            "9:00 AM",
            &["Task", "Important"],
            false,
            "Creative activity for relaxation and artistic expression through mandala art.",
        ),
    ]
}
