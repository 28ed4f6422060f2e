use taskdeck_core::task::Task;
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCard;

#[derive(Properties, PartialEq)]
pub struct TaskGroupProps {
  pub heading:    AttrValue,
  pub empty_text: AttrValue,
  pub tasks:      Vec<Task>,
  pub on_edit:    Callback<Task>,
  pub on_delete:  Callback<Task>
}

#[function_component(TaskGroup)]
pub fn task_group(
  props: &TaskGroupProps
) -> Html {
  html! {
      <section class="task-group">
          <h1 class="task-group-heading">{ props.heading.clone() }</h1>
          <div class="task-group-body">
              {
                  if props.tasks.is_empty() {
                      html! { <p class="task-group-empty">{ props.empty_text.clone() }</p> }
                  } else {
                      html! {
                          <>
                              {
                                  for props.tasks.iter().map(|task| html! {
                                      <TaskCard
                                          key={task.id}
                                          task={task.clone()}
                                          on_edit={props.on_edit.clone()}
                                          on_delete={props.on_delete.clone()}
                                      />
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>
      </section>
  }
}
