//! The base module contains the infrastructure shared by the tokenizer and its driver.

pub mod source_file;

mod error;
#[doc(inline)]
pub use error::{Error, Result};

mod diagnostic;
pub use diagnostic::{Handler, PrintHandler, SilentHandler};

mod file_provider;
#[cfg(feature = "fs_access")]
pub use file_provider::FsProvider;
pub use file_provider::{FileProvider, MemoryProvider};
