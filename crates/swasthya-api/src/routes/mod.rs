pub mod chat;
pub mod emergency;
pub mod facilities;
pub mod health;
pub mod medicines;
pub mod schemes;
pub mod sessions;
pub mod symptoms;
