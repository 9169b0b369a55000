pub mod config;
pub mod floors;
pub mod link;
pub mod qr;
