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
pub struct PageHeaderProps {
  pub on_add: Callback<MouseEvent>
}

#[function_component(PageHeader)]
pub fn page_header(
  props: &PageHeaderProps
) -> Html {
  html! {
      <div class="page-header">
          <h1 class="page-title">{ "Task Manager" }</h1>
          <p class="page-tagline">{ "Organize your work and life, finally." }</p>
          <div class="page-actions">
              <Button kind={ButtonKind::Success} onclick={props.on_add.clone()}>
                  { "Add New Task" }
              </Button>
          </div>
      </div>
  }
}
