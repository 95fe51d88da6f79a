pub mod receipt;

pub use receipt::{Item, ItemPayload, Receipt, ReceiptPayload};
