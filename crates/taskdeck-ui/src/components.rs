mod button;
mod drawer;
mod page_header;
mod task_card;
mod task_form;
mod task_group;

pub use button::{
  Button,
  ButtonKind
};
pub use drawer::Drawer;
pub use page_header::PageHeader;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_group::TaskGroup;
