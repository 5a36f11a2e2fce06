mod mca_error;

pub use mca_error::{McaError, McaResult};
