mod naming;

pub use naming::NamingServices;
