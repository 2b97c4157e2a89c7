pub mod label;
pub mod stage;
pub mod status;
pub mod test_result;
