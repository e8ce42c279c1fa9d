pub mod audit;
pub mod clients;
pub mod editors;
pub mod expenses;
pub mod payouts;
pub mod savings;
pub mod users;
pub mod videos;
