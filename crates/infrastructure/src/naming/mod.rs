pub mod ens;
pub mod static_provider;

pub use ens::EnsNameProvider;
pub use static_provider::StaticNameProvider;
