mod court;

pub use crate::court::api::*;
