pub mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, load_json, save_json};
