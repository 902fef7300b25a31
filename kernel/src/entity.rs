mod catalog;
mod item;
mod ledger;
mod policy;
mod profile;
mod rental;
mod user;
mod wishlist;

pub use self::{
    catalog::*, item::*, ledger::*, policy::*, profile::*, rental::*, user::*, wishlist::*,
};
