pub mod game_picker;
pub mod guide_view;
pub mod lesson_view;
pub mod match_board;
pub mod menu;
pub mod quiz_panel;
pub mod result_card;
pub mod safety_view;
pub mod sort_board;
pub mod star_bar;
