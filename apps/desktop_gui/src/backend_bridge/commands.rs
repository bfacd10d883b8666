//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    FetchList { server_url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchList { .. } => "fetch_list",
        }
    }
}
