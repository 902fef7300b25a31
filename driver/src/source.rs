mod fixed;
mod jsonplaceholder;

pub use self::{fixed::*, jsonplaceholder::*};
