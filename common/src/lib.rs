//! Park data model and filter logic shared by the page components.

extern crate serde;


pub mod park;
pub mod park_const;
pub mod filter_options;
pub mod filter_selection;
pub mod filter_and_sort;
pub mod park_list_view;
pub mod url_filters;
pub mod fetch_generation;
pub mod page_state;
