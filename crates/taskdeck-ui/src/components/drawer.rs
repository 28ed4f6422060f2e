use std::cell::Cell;

use gloo::events::EventListener;
use taskdeck_core::overlay::{
  OverlayOptions,
  backdrop_class,
  container_class,
  is_close_key,
  panel_class
};
use wasm_bindgen::JsCast;
use web_sys::{
  CssStyleDeclaration,
  HtmlElement,
  KeyboardEvent
};
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

/// Slide-in panel around arbitrary content.
///
/// Always mounted; `open` only flips the
/// classes so the transition plays on both
/// open and close. The caller owns `open`
/// and decides what `on_close` does.
#[derive(Properties, PartialEq)]
pub struct DrawerProps {
  pub open:        bool,
  pub on_close:    Callback<()>,
  #[prop_or_default]
  pub options:     OverlayOptions,
  #[prop_or_default]
  pub title:       Option<AttrValue>,
  #[prop_or_default]
  pub description: Option<AttrValue>,
  #[prop_or_default]
  pub footer:      Option<Html>,
  #[prop_or_default]
  pub class:       AttrValue,
  #[prop_or_default]
  pub children:    Html
}

thread_local! {
  static NEXT_DRAWER_ID: Cell<u32> =
    const { Cell::new(0) };
}

fn next_drawer_id() -> u32 {
  NEXT_DRAWER_ID.with(|next| {
    let id = next.get();
    next.set(id.wrapping_add(1));
    id
  })
}

fn root_style()
-> Option<CssStyleDeclaration> {
  web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.document_element()
    })
    .and_then(|element| {
      element
        .dyn_into::<HtmlElement>()
        .ok()
    })
    .map(|element| element.style())
}

/// Hides page overflow and returns what was
/// there before.
fn lock_scroll() -> Option<String> {
  let style = root_style()?;
  let previous = style
    .get_property_value("overflow")
    .unwrap_or_default();
  if let Err(error) =
    style.set_property("overflow", "hidden")
  {
    tracing::warn!(
      ?error,
      "failed to lock page scroll"
    );
  }
  Some(previous)
}

fn unlock_scroll(previous: &str) {
  let Some(style) = root_style() else {
    return;
  };
  if let Err(error) =
    style.set_property("overflow", previous)
  {
    tracing::warn!(
      ?error,
      "failed to restore page scroll"
    );
  }
}

#[function_component(Drawer)]
pub fn drawer(
  props: &DrawerProps
) -> Html {
  let panel_ref = use_node_ref();
  let drawer_id =
    use_state(next_drawer_id);
  let title_id =
    format!("drawer-{}-title", *drawer_id);
  let desc_id =
    format!("drawer-{}-desc", *drawer_id);

  use_effect_with(props.open, |open| {
    let previous =
      if *open { lock_scroll() } else { None };
    move || {
      if let Some(previous) = previous {
        unlock_scroll(&previous);
      }
    }
  });

  use_effect_with(
    (props.open, props.on_close.clone()),
    |(open, on_close)| {
      let listener = open.then(|| {
        let on_close = on_close.clone();
        EventListener::new(
          &gloo::utils::window(),
          "keydown",
          move |event| {
            let Some(event) = event
              .dyn_ref::<KeyboardEvent>()
            else {
              return;
            };
            if is_close_key(&event.key()) {
              tracing::debug!(
                "escape closes drawer"
              );
              on_close.emit(());
            }
          }
        )
      });
      move || drop(listener)
    }
  );

  {
    let panel_ref = panel_ref.clone();
    use_effect_with(props.open, move |open| {
      if *open {
        if let Some(panel) =
          panel_ref.cast::<HtmlElement>()
        {
          if let Err(error) = panel.focus() {
            tracing::warn!(
              ?error,
              "failed to focus drawer"
            );
          }
        }
      }
      || ()
    });
  }

  let on_backdrop_click = props
    .options
    .close_on_backdrop
    .then(|| {
      let on_close = props.on_close.clone();
      Callback::from(move |_: MouseEvent| {
        on_close.emit(())
      })
    });
  let on_close_click = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(())
    })
  };
  let stop = Callback::from(
    |event: MouseEvent| {
      event.stop_propagation()
    }
  );

  let labelled_by = props
    .title
    .as_ref()
    .map(|_| title_id.clone());
  let described_by = props
    .description
    .as_ref()
    .map(|_| desc_id.clone());

  html! {
      <div class={container_class(props.open)}>
          <div class={backdrop_class(props.open)} onclick={on_backdrop_click}></div>
          <section
              role="dialog"
              aria-modal="true"
              aria-labelledby={labelled_by}
              aria-describedby={described_by}
              tabindex="-1"
              ref={panel_ref}
              onclick={stop}
              class={panel_class(&props.options, props.open, &props.class)}
          >
              <div class="drawer-header">
                  <div class="drawer-heading">
                      {
                          if let Some(title) = props.title.clone() {
                              html! { <h2 id={title_id.clone()} class="drawer-title">{ title }</h2> }
                          } else {
                              html! {}
                          }
                      }
                      {
                          if let Some(description) = props.description.clone() {
                              html! { <p id={desc_id.clone()} class="drawer-description">{ description }</p> }
                          } else {
                              html! {}
                          }
                      }
                  </div>
                  <button type="button" class="drawer-close" aria-label="Close" onclick={on_close_click}>
                      <svg width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                          <path d="M6 6l12 12M18 6L6 18" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
                      </svg>
                  </button>
              </div>
              <div class="drawer-body">{ props.children.clone() }</div>
              {
                  if let Some(footer) = props.footer.clone() {
                      html! { <div class="drawer-footer">{ footer }</div> }
                  } else {
                      html! {}
                  }
              }
          </section>
      </div>
  }
}
