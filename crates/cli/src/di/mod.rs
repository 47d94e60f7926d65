mod dns;
mod store;

pub use dns::DnsServices;
