pub mod record;

pub use record::{
    Directory, DirectoryEntry, Entry, Offer, ProfileRecords, Record, Role, TableRow, Value,
};
