pub mod faq;
pub mod floor_code;
pub mod floors;
pub mod home;
pub mod map;
pub mod street_view;
