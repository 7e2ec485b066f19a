//! Object Storage Adapters

mod supabase_storage;

pub use supabase_storage::{SupabaseStorageClient, SupabaseStorageConfig};
