mod directory_port;
mod intent_port;
mod profile_port;
mod token_storage_port;

pub use directory_port::DirectoryPort;
pub use intent_port::DeviceIntentPort;
pub use profile_port::ProfilePort;
pub use token_storage_port::TokenStoragePort;
