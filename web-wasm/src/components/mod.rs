pub mod header;
pub mod search_bar;
pub mod candidate_list;
pub mod result_card;
pub mod status_message;
