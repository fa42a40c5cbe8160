mod frontend_server;
mod registry_server;
mod server;
mod shutdown;

pub use frontend_server::FrontendRpcServer;
pub use registry_server::RegistryRpcServer;
pub use server::RpcServer;
pub use shutdown::shutdown_signal;
pub use shutdown::RpcServerShutdownHandle;
pub use shutdown::RpcServerShutdownSignal;
