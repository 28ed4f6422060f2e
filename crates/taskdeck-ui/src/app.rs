use std::rc::Rc;

use gloo::console::log;
use taskdeck_core::bootstrap;
use taskdeck_core::config::AppConfig;
use taskdeck_core::page::{
  EMPTY_COMPLETED,
  EMPTY_NOT_COMPLETED,
  PageAction,
  PageState
};
use taskdeck_core::task::Task;
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::components::{
  Drawer,
  PageHeader,
  TaskForm,
  TaskGroup
};

const CONFIG_TOML: &str =
  include_str!("../taskdeck.toml");

#[derive(Clone, PartialEq)]
struct PageModel(PageState);

impl Reducible for PageModel {
  type Action = PageAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    next.0.apply(action);
    Rc::new(next)
  }
}

fn load_config() -> AppConfig {
  match AppConfig::from_toml_str(
    CONFIG_TOML
  ) {
    | Ok(cfg) => cfg,
    | Err(error) => {
      tracing::warn!(
        error = %format!("{error:#}"),
        "embedded config rejected; using \
         defaults"
      );
      AppConfig::default()
    }
  }
}

fn initial_page(
  cfg: &AppConfig
) -> PageModel {
  match bootstrap(cfg) {
    | Ok(page) => PageModel(page),
    | Err(error) => {
      tracing::warn!(
        %error,
        "seeding failed; starting empty"
      );
      PageModel(PageState::default())
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_config);
  let page = {
    let config_snapshot =
      (*config).clone();
    use_reducer(move || {
      initial_page(&config_snapshot)
    })
  };
  let debug_log = config.ui.debug_log;

  {
    use_effect_with((), move |_| {
      ui_debug(
        debug_log,
        "app.mounted",
        "task page mounted"
      );
      || ()
    });
  }

  let on_open_create = {
    let page = page.dispatcher();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        debug_log,
        "button.add.click",
        "opening create form"
      );
      page.dispatch(PageAction::OpenCreate);
    })
  };

  let on_close = {
    let page = page.dispatcher();
    Callback::from(move |()| {
      ui_debug(
        debug_log,
        "drawer.close",
        "closing drawer"
      );
      page.dispatch(PageAction::Close);
    })
  };

  let on_edit = {
    let page = page.dispatcher();
    Callback::from(move |task: Task| {
      ui_debug(
        debug_log,
        "card.edit.click",
        &format!("editing task {}", task.id)
      );
      page.dispatch(PageAction::OpenEdit(
        task
      ));
    })
  };

  let on_delete = {
    let page = page.dispatcher();
    Callback::from(move |task: Task| {
      ui_debug(
        debug_log,
        "card.delete.click",
        &format!("deleting task {}", task.id)
      );
      page
        .dispatch(PageAction::Delete(task.id));
    })
  };

  let on_submit = {
    let page = page.dispatcher();
    Callback::from(move |record: Task| {
      ui_debug(
        debug_log,
        "form.submit",
        &format!(
          "submitting \"{}\"",
          record.title
        )
      );
      page
        .dispatch(PageAction::Submit(record));
    })
  };

  let state = &page.0;
  let view = state.view();
  let heading = AttrValue::from(
    state.form().heading()
  );

  html! {
      <div class="page">
          <PageHeader on_add={on_open_create} />
          <TaskGroup
              heading="Not Completed Tasks"
              empty_text={EMPTY_NOT_COMPLETED}
              tasks={view.not_completed}
              on_edit={on_edit.clone()}
              on_delete={on_delete.clone()}
          />
          <TaskGroup
              heading="Completed Tasks"
              empty_text={EMPTY_COMPLETED}
              tasks={view.completed}
              on_edit={on_edit}
              on_delete={on_delete}
          />
          <Drawer
              open={state.overlay_open}
              on_close={on_close}
              options={config.drawer}
              title={heading}
          >
              <TaskForm seed={state.editing.clone()} on_submit={on_submit} />
          </Drawer>
      </div>
  }
}

fn ui_debug(
  enabled: bool,
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  if enabled {
    log!(format!(
      "[ui-debug] {event}: {detail}"
    ));
  }
}
