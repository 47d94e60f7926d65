mod etcd_gateway_mock;

pub use etcd_gateway_mock::{GatewayMode, MockEtcdGateway};
