//! Building blocks shared by the queue flavors.

mod cursor;
mod ring;

pub(crate) use cursor::{Cursor, Indices};
pub(crate) use ring::Ring;
