use crate::core::*;

mod pop_test;
mod random_test;
mod drop_test;
