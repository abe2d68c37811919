pub mod analyze;
pub mod common;
pub mod emit;
pub mod errors;
pub mod expand;
pub mod ir;
pub mod names;
pub mod options;

pub use common::{builders, diag, type_utils};
pub use errors::ExpandError;
pub use ir::{MemberDescriptor, MemberKind, PropertyDecl};
pub use names::{derive_names, PropertyNames};
pub use options::{CachePolicy, PropertyConfig};
