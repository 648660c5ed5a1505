pub mod action;
pub mod draft;
pub mod macro_list;
pub mod requests;
pub mod responses;
pub mod session;

pub use action::*;
pub use draft::*;
pub use macro_list::*;
pub use requests::*;
pub use responses::*;
pub use session::*;
