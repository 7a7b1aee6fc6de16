mod body;
mod buttons;
mod fields;
mod footer;
mod popup;

pub use body::{render_heading, render_status};
pub use buttons::render_buttons;
pub use fields::render_fields;
pub use footer::render_footer;
pub use popup::render_confirm;
