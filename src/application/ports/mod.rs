//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_generator;
mod object_storage;
mod scratch_store;

pub use audio_generator::{AudioGeneratorPort, GenerateRequest, GeneratorError};
pub use object_storage::{ObjectStoragePort, StorageError};
pub use scratch_store::{ScratchError, ScratchStorePort};
