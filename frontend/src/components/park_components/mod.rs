pub mod filter_select;
pub mod park_item_card;
pub mod park_list;
pub mod search_button;
