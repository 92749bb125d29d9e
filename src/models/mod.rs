pub mod system_record;

pub use system_record::{InsertedRecord, NewSystemRecord, SystemRecord};
