use taskdeck_core::card::{
  badge_class,
  completion_label,
  date_line
};
use taskdeck_core::task::Task;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  Button,
  ButtonKind
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:      Task,
  pub on_edit:   Callback<Task>,
  pub on_delete: Callback<Task>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let task = &props.task;
  let on_edit_click = {
    let on_edit = props.on_edit.clone();
    let task = task.clone();
    Callback::from(move |_: MouseEvent| {
      on_edit.emit(task.clone())
    })
  };
  let on_delete_click = {
    let on_delete =
      props.on_delete.clone();
    let task = task.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(task.clone())
    })
  };

  html! {
      <div class="task-card">
          <h5 class="task-card-title">{ &task.title }</h5>
          <p class="task-card-description">{ &task.description }</p>
          <div class="task-card-meta">
              <span class={badge_class(task.is_completed)}>
                  { completion_label(task.is_completed) }
              </span>
              <span class="task-card-date">{ date_line(task) }</span>
          </div>
          <div class="task-card-actions">
              <Button kind={ButtonKind::Edit} onclick={on_edit_click}>{ "Edit" }</Button>
              <Button kind={ButtonKind::Delete} onclick={on_delete_click}>{ "Delete" }</Button>
          </div>
      </div>
  }
}
