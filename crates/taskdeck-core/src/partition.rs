use crate::task::Task;

/// Completed and not-completed views of one snapshot, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub not_completed: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.not_completed.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition(tasks: &[Task]) -> Partition {
    let (completed, not_completed) = tasks.iter().cloned().partition(|task| task.is_completed);
    Partition {
        not_completed,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, done: bool) -> Task {
        Task {
            id,
            title: format!("task-{id}"),
            description: "d".to_string(),
            is_completed: done,
            ..Task::default()
        }
    }

    #[test]
    fn splits_by_completion_keeping_order() {
        let tasks = vec![task(1, false), task(2, true), task(3, false), task(4, true)];
        let view = partition(&tasks);

        let open: Vec<u64> = view.not_completed.iter().map(|t| t.id).collect();
        let done: Vec<u64> = view.completed.iter().map(|t| t.id).collect();
        assert_eq!(open, vec![1, 3]);
        assert_eq!(done, vec![2, 4]);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn empty_input_gives_empty_groups() {
        let view = partition(&[]);
        assert!(view.is_empty());
        assert!(view.completed.is_empty());
        assert!(view.not_completed.is_empty());
    }
}
