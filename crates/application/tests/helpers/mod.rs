mod mock_name_provider;

pub use mock_name_provider::MockNameProvider;
