pub mod form;
pub mod toast;
pub mod ui;

pub use form::*;
pub use ui::*;
