use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(
  Clone, Copy, Default, PartialEq, Eq,
)]
pub enum ButtonKind {
  Success,
  Edit,
  Delete,
  #[default]
  Default
}

impl ButtonKind {
  fn class(self) -> &'static str {
    match self {
      | Self::Success => "primary",
      | Self::Edit => "edit",
      | Self::Delete => "danger",
      | Self::Default => "plain"
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
  #[prop_or_default]
  pub kind:        ButtonKind,
  #[prop_or(AttrValue::Static("button"))]
  pub button_type: AttrValue,
  #[prop_or_default]
  pub onclick:
    Option<Callback<MouseEvent>>,
  #[prop_or_default]
  pub children:    Html
}

#[function_component(Button)]
pub fn button(
  props: &ButtonProps
) -> Html {
  html! {
      <button
          type={props.button_type.clone()}
          class={classes!("btn", props.kind.class())}
          onclick={props.onclick.clone()}
      >
          { props.children.clone() }
      </button>
  }
}
