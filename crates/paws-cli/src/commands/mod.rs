pub mod admin;
pub mod cart;
pub mod catalog;
pub mod dispatch;
pub mod partners;
pub mod schema;
pub mod serve;
pub mod shared;
