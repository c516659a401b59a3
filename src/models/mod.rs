pub mod generated_record;
pub mod request_record;
pub mod schema_registry;
pub mod settings;

pub use generated_record::{GeneratedRecord, RowWarning};
pub use request_record::{InputRecord, RawRecord, RequestTable};
pub use schema_registry::{SchemaRegistry, SchemaRegistryEntry};
pub use settings::EnvironmentSettings;
