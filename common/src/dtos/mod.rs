mod root;
pub use root::*;

mod convert;
pub use convert::*;
