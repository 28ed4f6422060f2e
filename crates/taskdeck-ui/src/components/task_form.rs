use taskdeck_core::form::{
  self,
  FormField,
  completion_value
};
use taskdeck_core::task::Task;
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

use super::{
  Button,
  ButtonKind
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  /// Edit mode when set, create mode
  /// otherwise.
  #[prop_or_default]
  pub seed:      Option<Task>,
  pub on_submit: Callback<Task>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = {
    let seed = props.seed.clone();
    use_state(move || {
      form::TaskForm::new(seed)
    })
  };

  let rejected =
    use_state(|| None::<String>);

  {
    let draft = draft.clone();
    let rejected = rejected.clone();
    use_effect_with(
      props.seed.clone(),
      move |seed| {
        draft.set(form::TaskForm::new(
          seed.clone()
        ));
        rejected.set(None);
        || ()
      }
    );
  }

  let on_field = {
    let draft = draft.clone();
    let rejected = rejected.clone();
    Callback::from(
      move |(name, value): (
        String,
        String
      )| {
        let mut next = (*draft).clone();
        match next.set_named(&name, &value)
        {
          | Ok(()) => {
            draft.set(next);
            rejected.set(None);
          }
          | Err(error) => {
            tracing::warn!(
              %error,
              "ignored form input"
            );
          }
        }
      }
    )
  };

  let on_text_input =
    on_field.reform(|e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      (input.name(), input.value())
    });
  let on_textarea_input =
    on_field.reform(|e: InputEvent| {
      let area: HtmlTextAreaElement =
        e.target_unchecked_into();
      (area.name(), area.value())
    });
  let on_select_change =
    on_field.reform(|e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      (select.name(), select.value())
    });

  let onsubmit = {
    let draft = draft.clone();
    let rejected = rejected.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let mut next = (*draft).clone();
      match next.submit() {
        | Ok(record) => {
          on_submit.emit(record);
          draft.set(next);
          rejected.set(None);
        }
        | Err(error) => {
          tracing::warn!(
            %error,
            "form submit rejected"
          );
          rejected.set(Some(
            error.to_string()
          ));
        }
      }
    })
  };

  let on_reset_click = {
    let draft = draft.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*draft).clone();
      next.reset();
      draft.set(next);
    })
  };

  let working = draft.working();
  let done = working.is_completed;

  html! {
      <div class="task-form">
          <form {onsubmit}>
              <div class="field">
                  <label for="title">{ "Title" }</label>
                  <input
                      type="text"
                      id="title"
                      name={FormField::Title.name()}
                      value={working.title.clone()}
                      oninput={on_text_input.clone()}
                      placeholder="Enter task title"
                      required=true
                  />
              </div>
              <div class="field">
                  <label for="description">{ "Description" }</label>
                  <textarea
                      id="description"
                      name={FormField::Description.name()}
                      value={working.description.clone()}
                      oninput={on_textarea_input}
                      placeholder="Enter task description"
                      rows="4"
                      required=true
                  />
              </div>
              <div class="field-row">
                  <div class="field">
                      <label for="isCompleted">{ "Status" }</label>
                      <select
                          id="isCompleted"
                          name={FormField::IsCompleted.name()}
                          onchange={on_select_change}
                      >
                          <option value={completion_value(false)} selected={!done}>{ "Not Completed" }</option>
                          <option value={completion_value(true)} selected={done}>{ "Completed" }</option>
                      </select>
                  </div>
                  <div class="field">
                      <label for="date">{ "Date" }</label>
                      <input
                          type="date"
                          id="date"
                          name={FormField::Date.name()}
                          value={working.date.clone()}
                          oninput={on_text_input}
                      />
                  </div>
              </div>
              {
                  if let Some(message) = (*rejected).clone() {
                      html! { <p class="form-error" role="alert">{ message }</p> }
                  } else {
                      html! {}
                  }
              }
              <div class="form-actions">
                  <Button onclick={on_reset_click}>{ "Reset" }</Button>
                  <Button kind={ButtonKind::Success} button_type="submit">
                      { draft.submit_label() }
                  </Button>
              </div>
          </form>
      </div>
  }
}
