pub mod notification;
pub mod usecase;
