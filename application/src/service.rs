mod auth;
mod catalog;
mod dashboard;
mod profile;
mod rental;
mod wishlist;

pub use self::{auth::*, catalog::*, dashboard::*, profile::*, rental::*, wishlist::*};
