use std::rc::Rc;

use tracing::{debug, info};

use crate::error::StoreError;
use crate::task::{Task, TaskFields, TaskId};

/// Authoritative ordered task sequence.
///
/// Reads hand out the current snapshot. Every successful mutation builds a
/// new snapshot and swaps it in, so a snapshot obtained earlier never changes
/// under its holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Rc<[Task]>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Rc::from(Vec::new()),
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store by creating each entry in order, so ids follow the
    /// usual assignment rule.
    pub fn seeded<I>(seed: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = TaskFields>,
    {
        let mut store = Self::new();
        for fields in seed {
            store.create(fields)?;
        }
        debug!(count = store.len(), "seeded task store");
        Ok(store)
    }

    pub fn list(&self) -> Rc<[Task]> {
        Rc::clone(&self.tasks)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Largest id plus one, or 1 when empty.
    ///
    /// Ids freed by deleting the current maximum are handed out again.
    pub fn next_id(&self) -> Result<TaskId, StoreError> {
        match self.tasks.iter().map(|task| task.id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdSpaceExhausted),
            None => Ok(1),
        }
    }

    #[tracing::instrument(skip(self, fields))]
    pub fn create(&mut self, fields: TaskFields) -> Result<Task, StoreError> {
        let id = self.next_id()?;
        let task = fields.into_task(id);

        let mut next = Vec::with_capacity(self.len() + 1);
        next.extend(self.tasks.iter().cloned());
        next.push(task.clone());
        self.tasks = Rc::from(next);

        info!(id, len = self.len(), "created task");
        Ok(task)
    }

    #[tracing::instrument(skip(self, fields))]
    pub fn update(&mut self, id: TaskId, fields: TaskFields) -> Result<Task, StoreError> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;
        let updated = self.tasks[idx].with_fields(fields);

        let next: Vec<Task> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| if i == idx { updated.clone() } else { task.clone() })
            .collect();
        self.tasks = Rc::from(next);

        info!(id, "updated task");
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.tasks[idx].clone();

        let next: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        self.tasks = Rc::from(next);

        info!(id, len = self.len(), "deleted task");
        Ok(removed)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, done: bool) -> TaskFields {
        TaskFields {
            title: title.to_string(),
            description: format!("{title} details"),
            is_completed: done,
            date: String::new(),
        }
    }

    #[test]
    fn first_task_gets_id_one() {
        let mut store = TaskStore::new();
        let task = store.create(fields("Gym", false)).expect("create");
        assert_eq!(task.id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_uses_max_plus_one_not_length() {
        let mut store = TaskStore::seeded(vec![
            fields("a", false),
            fields("b", false),
            fields("c", false),
        ])
        .expect("seed");
        store.delete(1).expect("delete");

        let task = store.create(fields("d", false)).expect("create");
        assert_eq!(task.id, 4);
    }

    #[test]
    fn deleting_the_max_lets_its_id_be_issued_again() {
        let mut store =
            TaskStore::seeded(vec![fields("a", false), fields("b", false)]).expect("seed");
        store.delete(2).expect("delete");

        let task = store.create(fields("c", false)).expect("create");
        assert_eq!(task.id, 2);
    }

    #[test]
    fn create_fails_when_ids_run_out() {
        let mut store = TaskStore::new();
        store.tasks = Rc::from(vec![fields("edge", false).into_task(TaskId::MAX)]);
        assert_eq!(
            store.create(fields("x", false)),
            Err(StoreError::IdSpaceExhausted)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn mutations_leave_old_snapshots_alone() {
        let mut store = TaskStore::seeded(vec![fields("a", false)]).expect("seed");
        let before = store.list();

        store.update(1, fields("renamed", true)).expect("update");
        store.create(fields("b", false)).expect("create");

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].title, "a");
        assert!(!Rc::ptr_eq(&before, &store.list()));
    }

    #[test]
    fn update_and_delete_report_missing_ids() {
        let mut store = TaskStore::seeded(vec![fields("a", false)]).expect("seed");
        let snapshot = store.list();

        assert_eq!(
            store.update(9, fields("x", true)),
            Err(StoreError::NotFound(9))
        );
        assert_eq!(store.delete(9), Err(StoreError::NotFound(9)));
        assert!(Rc::ptr_eq(&snapshot, &store.list()));
    }

    #[test]
    fn get_finds_by_id() {
        let store = TaskStore::seeded(vec![fields("a", false), fields("b", true)]).expect("seed");
        assert_eq!(store.get(2).map(|t| t.title.as_str()), Some("b"));
        assert!(store.get(3).is_none());
    }
}
