//! Working state behind the create/edit task form.
//!
//! The form never touches the store. It hands a candidate record back to its
//! caller on submit.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::FormError;
use crate::task::{Task, TaskFields};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Task),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    IsCompleted,
    Date,
}

impl FormField {
    /// The `name` attribute of the matching input element.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::IsCompleted => "isCompleted",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "isCompleted" => Ok(Self::IsCompleted),
            "date" => Ok(Self::Date),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Select-option encoding of the completion flag.
pub fn completion_value(is_completed: bool) -> &'static str {
    if is_completed { "true" } else { "false" }
}

pub fn parse_completion(raw: &str) -> Result<bool, FormError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(FormError::InvalidCompletion(other.to_string())),
    }
}

/// Title first, then description. Same rule as a `required` input: only the
/// empty string is missing.
fn check_required(title: &str, description: &str) -> Result<(), FormError> {
    if title.is_empty() {
        return Err(FormError::ValidationMissing(FormField::Title));
    }
    if description.is_empty() {
        return Err(FormError::ValidationMissing(FormField::Description));
    }
    Ok(())
}

pub fn validate_fields(fields: &TaskFields) -> Result<(), FormError> {
    check_required(&fields.title, &fields.description)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    mode: FormMode,
    working: Task,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TaskForm {
    /// Create mode without a seed, edit mode pre-filled from it otherwise.
    pub fn new(seed: Option<Task>) -> Self {
        match seed {
            Some(task) => Self {
                working: task.clone(),
                mode: FormMode::Edit(task),
            },
            None => Self {
                mode: FormMode::Create,
                working: Task::default(),
            },
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn working(&self) -> &Task {
        &self.working
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Task"
        } else {
            "Add a New Task"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update Task"
        } else {
            "Add Task"
        }
    }

    /// Replaces exactly one field of the working record.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        match field {
            FormField::Title => self.working.title = raw.to_string(),
            FormField::Description => self.working.description = raw.to_string(),
            FormField::IsCompleted => self.working.is_completed = parse_completion(raw)?,
            FormField::Date => self.working.date = raw.to_string(),
        }
        Ok(())
    }

    pub fn set_named(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let field = name.parse()?;
        self.set_field(field, raw)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        check_required(&self.working.title, &self.working.description)
    }

    /// Yields the full working record.
    ///
    /// In create mode the working record goes back to the empty defaults
    /// afterwards. In edit mode it stays as submitted.
    pub fn submit(&mut self) -> Result<Task, FormError> {
        self.validate()?;
        let submitted = self.working.clone();
        if !self.is_edit() {
            self.working = Task::default();
        }
        debug!(id = submitted.id, edit = self.is_edit(), "task form submitted");
        Ok(submitted)
    }

    /// Back to the empty defaults in either mode. In edit mode this drops the
    /// seed values too; the mode itself is kept.
    pub fn reset(&mut self) {
        self.working = Task::default();
    }
}
