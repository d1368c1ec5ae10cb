pub mod order;
pub mod prune;
pub mod validate;
