pub mod builders;
pub mod diag;
pub mod type_utils;
