pub mod list;
pub mod record;

pub use list::{WordList, WordSource};
pub use record::{Level, VerbRecord};
