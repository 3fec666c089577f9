pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tcv")]
#[command(about = "Browse Trimble Connect projects and emit viewer documents")]
pub struct Args {
    /// Remote base URL (overrides the stored config)
    #[arg(long, global = true)]
    pub remote: Option<url::Url>,

    /// Bearer access token (overrides TCV_ACCESS_TOKEN and the stored config)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: crate::Command,
}
