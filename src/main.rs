use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::info;

use authtoken::{
    Principal, TokenKind,
    adapters::http::bearer::extract_from_header,
    infra::setup::{init_token_service, init_tracing},
};

#[derive(Parser)]
#[command(name = "authtoken", version, about = "Issue, verify and rotate signed access/refresh tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Issue a new access/refresh pair
    Issue {
        #[arg(long)]
        subject: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Verify a token and print its claims
    Verify {
        /// Raw token or `Bearer <token>`
        token: String,
        #[arg(long, default_value = "access")]
        kind: TokenKind,
    },
    /// Exchange a refresh token for a new pair
    Refresh {
        /// Raw token or `Bearer <token>`
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let service = init_token_service()?;

    let output = match cli.command {
        Command::Issue {
            subject,
            email,
            name,
        } => {
            let pair = service.issue(&Principal::new(subject, email, name))?;
            serde_json::to_value(pair)?
        }
        Command::Verify { token, kind } => {
            let token = extract_from_header(&token).unwrap_or(token.as_str());
            let claims = service.verify(token, kind)?;
            info!(kind = %kind, subject = %claims.subject(), "Token verified");
            serde_json::to_value(claims)?
        }
        Command::Refresh { token } => {
            let token = extract_from_header(&token).unwrap_or(token.as_str());
            serde_json::to_value(service.refresh(token)?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
