pub mod basic;
pub mod firebase;
