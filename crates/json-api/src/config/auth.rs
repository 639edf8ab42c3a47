//! Admin Auth Config

use clap::Args;

/// Admin route authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Bearer token required by `/admin` routes. Admin routes reject every
    /// request while this is empty.
    #[arg(
        long,
        env = "ADMIN_TOKEN",
        hide_env_values = true,
        default_value = ""
    )]
    pub admin_token: String,
}
