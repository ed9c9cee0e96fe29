pub mod field;
pub mod headers;
pub mod validator;
pub mod vary;

pub use field::{Field, FieldList};
pub use headers::{HeaderFields, HttpHeaders};
pub use validator::{NameFault, VaryError};
pub use vary::{append, vary, VARY};
