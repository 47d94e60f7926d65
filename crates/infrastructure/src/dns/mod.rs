pub mod record_builder;
pub mod record_type_map;
pub mod server;

pub use record_builder::build_record;
pub use record_type_map::RecordTypeMapper;
pub use server::KvDnsHandler;
