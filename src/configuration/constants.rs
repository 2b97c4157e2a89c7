pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod common {
    /// Prefix of environment variables read into `Settings`.
    pub const ENV_PREFIX: &str = "TAGRUN";
    pub const DEFAULT_RUN_NAME: &str = "tagrun";
}
