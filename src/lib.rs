pub mod portainer_client;

#[allow(unused_imports)]
pub use portainer_client::{
    Container, ContainerPort, Endpoint, HostConfig, Mount, NetworkConfig, NetworkSettings,
    PortainerClient, PortainerConfig, PortainerError,
};
