// Runtime configuration handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub postprocess_queue_capacity: usize,
    pub postprocess_max_attempts: u32,
    pub authority_sync_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}
