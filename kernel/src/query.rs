mod catalog;
mod user;

pub use self::{catalog::*, user::*};
