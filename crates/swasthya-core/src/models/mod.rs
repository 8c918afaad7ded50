pub mod assessment;
pub mod chat_history;
pub mod facility;
pub mod medicine;
pub mod scheme;
pub mod symptom;
