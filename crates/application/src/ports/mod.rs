mod name_provider;

pub use name_provider::{NameProvider, ResolverHandle};
