pub mod input;
pub mod scroll;
#[cfg(test)]
pub mod test_utils;
