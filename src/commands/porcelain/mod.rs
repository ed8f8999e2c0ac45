pub mod compare;
pub mod demo;
