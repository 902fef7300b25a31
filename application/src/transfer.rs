mod catalog;
mod dashboard;
mod profile;
mod rental;
mod user;
mod wishlist;

pub use self::{catalog::*, dashboard::*, profile::*, rental::*, user::*, wishlist::*};
