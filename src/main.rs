use anyhow::Result;
use clap::Parser;
use ghuf::github::GithubUser;
use ghuf::http::{HttpError, Session};
use ghuf::reconcile::reconcile;

/// ghuf - GitHub Unfollower
///
/// Unfollow all the users on GitHub who don't care enough to follow you back.
///
/// The token may be an account password or a personal access token with the
/// user:follow scope enabled.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// The GitHub username to run this tool for
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// The password or personal access token corresponding to USERNAME
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(unfollowed) => {
            if unfollowed.is_empty() {
                println!("No users were unfollowed.");
            } else {
                println!(
                    "The following users were unfollowed: {}",
                    unfollowed.join(", ")
                );
            }
        }
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Vec<String>> {
    let session = Session::new(&cli.username, &cli.token)?;
    let mut user = GithubUser::new(session, cli.api_url);
    reconcile(&mut user).await
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<HttpError>() {
        Some(http) if http.is_unauthorized() => {
            eprintln!("Error! 401 Unauthorized! Check your username and token.");
        }
        Some(http) => {
            eprintln!("HTTP error! (response {})", http.status.as_u16());
        }
        None => {
            eprintln!("Error: {err:#}");
        }
    }
}
