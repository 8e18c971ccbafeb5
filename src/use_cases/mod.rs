pub mod create_bracket;
pub mod error_view;
pub mod get_bracket;
pub mod list_brackets;

#[cfg(test)]
pub(crate) mod test_support;
