use serde::{Deserialize, Serialize};

/// Logical icon for an add-option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionIcon {
    Brain,
    Repeat,
    Tick,
    Goal,
}

impl OptionIcon {
    /// Glyph shown next to the option title.
    pub fn glyph(self) -> char {
        match self {
            OptionIcon::Brain => '◆',
            OptionIcon::Repeat => '↻',
            OptionIcon::Tick => '✓',
            OptionIcon::Goal => '◎',
        }
    }
}

/// One of the fixed creatable item kinds offered from the add sheet.
/// Selecting one only shows a confirmation; nothing is ever created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOption {
    pub id: u32,
    pub title: String,
    pub icon: OptionIcon,
    pub description: String,
}

/// The fixed catalog of four creatable item kinds.
pub fn builtin_add_options() -> Vec<AddOption> {
    fn option(id: u32, title: &str, icon: OptionIcon, description: &str) -> AddOption {
        AddOption {
            id,
            title: title.to_string(),
            icon,
            description: description.to_string(),
        }
    }

    vec![
        option(
            1,
            "Habit",
            OptionIcon::Brain,
            "Activity that repeats over time it has detailed tracking and statistics.",
        ),
        option(
            2,
            "Recurring Task",
            OptionIcon::Repeat,
            "Activity that repeats over time it has detailed tracking and statistics.",
        ),
        option(
            3,
            "Task",
            OptionIcon::Tick,
            "Single instance activity without tracking over time.",
        ),
        option(
            4,
            "Goal of the Day",
            OptionIcon::Goal,
            "A specific target set for oneself to achieve within a single day.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_kinds() {
        let options = builtin_add_options();
        let titles: Vec<&str> = options.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Habit", "Recurring Task", "Task", "Goal of the Day"]);
    }
}
