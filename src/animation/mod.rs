pub mod ease;
pub mod keys;
