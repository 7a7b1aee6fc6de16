mod components;
mod view;

pub use view::{ConfirmRender, UiContext, draw};
