//! State of the task page: the store plus the transient drawer/editing
//! state, and the transitions the page's controls trigger.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::form::TaskForm;
use crate::partition::{Partition, partition};
use crate::store::TaskStore;
use crate::task::{Task, TaskId};

pub const EMPTY_NOT_COMPLETED: &str = "No tasks to display.";
pub const EMPTY_COMPLETED: &str = "No completed tasks yet.";

#[derive(Debug, Clone)]
pub enum PageAction {
    OpenCreate,
    OpenEdit(Task),
    Close,
    Submit(Task),
    Delete(TaskId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub store: TaskStore,
    pub overlay_open: bool,
    pub editing: Option<Task>,
}

impl PageState {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            overlay_open: false,
            editing: None,
        }
    }

    /// Derived on every call; nothing is cached next to the store.
    pub fn view(&self) -> Partition {
        partition(&self.store.list())
    }

    /// The form the drawer should host right now.
    pub fn form(&self) -> TaskForm {
        TaskForm::new(self.editing.clone())
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::OpenCreate => {
                self.editing = None;
                self.overlay_open = true;
            }
            PageAction::OpenEdit(task) => {
                debug!(id = task.id, "editing task");
                self.editing = Some(task);
                self.overlay_open = true;
            }
            PageAction::Close => {
                self.editing = None;
                self.overlay_open = false;
            }
            PageAction::Submit(record) => {
                if let Err(err) = self.submit(record) {
                    warn!(error = %err, "submit dropped");
                }
                self.editing = None;
                self.overlay_open = false;
            }
            PageAction::Delete(id) => {
                if let Err(err) = self.store.delete(id) {
                    warn!(error = %err, "delete dropped");
                }
            }
        }
    }

    fn submit(&mut self, record: Task) -> Result<Task, StoreError> {
        match &self.editing {
            // The edited task's id wins over the record's, which a form reset zeroes.
            Some(editing) => self.store.update(editing.id, record.fields()),
            None => self.store.create(record.fields()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::seed_fields;

    fn seeded() -> PageState {
        PageState::new(TaskStore::seeded(seed_fields()).expect("seed store"))
    }

    #[test]
    fn open_create_clears_stale_edit() {
        let mut page = seeded();
        let study = page.store.get(2).cloned().expect("study");
        page.apply(PageAction::OpenEdit(study));
        page.apply(PageAction::OpenCreate);

        assert!(page.overlay_open);
        assert!(page.editing.is_none());
        assert!(!page.form().is_edit());
    }

    #[test]
    fn open_edit_seeds_the_form() {
        let mut page = seeded();
        let gym = page.store.get(1).cloned().expect("gym");
        page.apply(PageAction::OpenEdit(gym.clone()));

        let form = page.form();
        assert!(form.is_edit());
        assert_eq!(form.working(), &gym);
    }

    #[test]
    fn close_hides_and_forgets_editing() {
        let mut page = seeded();
        let gym = page.store.get(1).cloned().expect("gym");
        page.apply(PageAction::OpenEdit(gym));
        page.apply(PageAction::Close);

        assert!(!page.overlay_open);
        assert!(page.editing.is_none());
        assert_eq!(page.store.len(), 2);
    }

    #[test]
    fn submit_in_create_mode_appends() {
        let mut page = seeded();
        page.apply(PageAction::OpenCreate);
        page.apply(PageAction::Submit(Task {
            title: "Read".to_string(),
            description: "x".to_string(),
            ..Task::default()
        }));

        assert!(!page.overlay_open);
        let created = page.store.get(3).expect("created");
        assert_eq!(created.title, "Read");
    }

    #[test]
    fn submit_after_reset_in_edit_mode_keeps_id() {
        let mut page = seeded();
        let study = page.store.get(2).cloned().expect("study");
        page.apply(PageAction::OpenEdit(study));

        let mut form = page.form();
        form.reset();
        form.set_named("title", "Revise").expect("title");
        form.set_named("description", "notes").expect("description");
        let record = form.submit().expect("submit");
        assert_eq!(record.id, 0);

        page.apply(PageAction::Submit(record));
        assert_eq!(page.store.len(), 2);
        let revised = page.store.get(2).expect("kept id");
        assert_eq!(revised.title, "Revise");
        assert!(page.store.get(0).is_none());
    }

    #[test]
    fn delete_of_missing_id_is_a_no_op() {
        let mut page = seeded();
        let before = page.store.clone();
        page.apply(PageAction::Delete(42));
        assert_eq!(page.store, before);
    }

    #[test]
    fn empty_groups_have_placeholders() {
        let page = PageState::default();
        let view = page.view();
        assert!(view.completed.is_empty());
        assert!(view.not_completed.is_empty());
        assert_ne!(EMPTY_NOT_COMPLETED, EMPTY_COMPLETED);
    }
}
