//! Components of the jump widget
//!
//! Every component here is a pure function of its props; widget state lives
//! in the controller.

pub mod footer;
pub mod result_list;
pub mod search_input;
pub mod shortcuts;

pub use footer::{Footer, FooterProps, Shortcut, jump_shortcuts};
pub use result_list::{
    ResultList, ResultListProps, ResultRow, ResultRowProps, RowFormatter, RowText, default_row,
};
pub use search_input::{PLACEHOLDER, SearchInput, SearchInputProps};
