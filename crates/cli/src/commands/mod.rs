pub mod calc;
pub mod list;
