//! access-check - inspect ETLA authorization outcomes
//!
//! Support tool answering "why can't this user open that page" from the same
//! tables the application uses.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use etla_access::guard::{GuardState, RouteGuard};
use etla_access::{AccessControl, AuthSnapshot, AuthState, Config, Feature, Permission};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "access-check", version, about = "Inspect ETLA role-based access decisions")]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(long, env = "ETLA_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, clap::Args)]
struct SessionArgs {
    /// Role string as reported by the auth backend
    #[arg(long)]
    role: Option<String>,

    /// Evaluate with demo mode on
    #[arg(long)]
    demo: bool,
}

impl SessionArgs {
    fn state(&self) -> AuthState {
        let snapshot = match &self.role {
            Some(role) => AuthSnapshot::authenticated(role.clone()),
            None => AuthSnapshot::anonymous(),
        };
        snapshot.with_demo_mode(self.demo).into()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check one permission on one feature
    Check {
        #[command(flatten)]
        session: SessionArgs,
        feature: Feature,
        permission: Permission,
    },
    /// List reachable features and the verbs held on each
    Features {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Run the route guard for a path
    Route {
        #[command(flatten)]
        session: SessionArgs,
        path: String,
    },
    /// Print the full role-permission matrix
    Matrix,
}

#[derive(Debug, Serialize)]
struct FeatureAccess {
    feature: Feature,
    permissions: Vec<Permission>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
enum RouteOutcome {
    Authorized { path: String },
    Denied(etla_access::guard::Denial),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };
    let access = AccessControl::new(config.access)?;

    match cli.command {
        Command::Check {
            session,
            feature,
            permission,
        } => {
            let state = session.state();
            let check = access
                .rbac()
                .evaluator(&state)
                .check_permission_detailed(feature, permission);
            match cli.format {
                Format::Text => match (&check.granted_by, &check.denial_reason) {
                    (Some(source), _) => println!("granted ({:?})", source),
                    (None, Some(reason)) => println!("denied: {}", reason),
                    (None, None) => println!("denied"),
                },
                format => emit(format, &check)?,
            }
        }
        Command::Features { session } => {
            let state = session.state();
            let evaluator = access.rbac().evaluator(&state);
            let features: Vec<FeatureAccess> = evaluator
                .accessible_features()
                .into_iter()
                .map(|feature| FeatureAccess {
                    feature,
                    permissions: evaluator.permission_level(feature),
                })
                .collect();
            match cli.format {
                Format::Text => {
                    for entry in &features {
                        let verbs: Vec<&str> =
                            entry.permissions.iter().map(|p| p.as_str()).collect();
                        println!("{:<20} {}", entry.feature, verbs.join(", "));
                    }
                }
                format => emit(format, &features)?,
            }
        }
        Command::Route { session, path } => {
            let state = session.state();
            let guard: RouteGuard = access.route_guard();
            let outcome = match guard.decide(&path, &state) {
                GuardState::Unauthorized(denial) => RouteOutcome::Denied(denial),
                GuardState::Authorized | GuardState::Pending => RouteOutcome::Authorized { path },
            };
            match (cli.format, &outcome) {
                (Format::Text, RouteOutcome::Authorized { path }) => {
                    println!("{}: authorized", path)
                }
                (Format::Text, RouteOutcome::Denied(denial)) => {
                    println!("{}: {}", denial.path, denial.message)
                }
                (format, outcome) => emit(format, outcome)?,
            }
        }
        Command::Matrix => {
            let matrix = access.rbac().matrix();
            match cli.format {
                Format::Text => {
                    for row in &matrix {
                        if row.wildcard {
                            println!("{}: * (all features, all permissions)", row.role);
                            continue;
                        }
                        println!("{}:", row.role);
                        for grant in row.grants {
                            println!(
                                "  {:<20} {:<8} {}",
                                grant.feature, grant.permission, grant.scope
                            );
                        }
                    }
                }
                format => emit(format, &matrix)?,
            }
        }
    }

    Ok(())
}

fn emit<T: Serialize>(format: Format, value: &T) -> anyhow::Result<()> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
        // Callers render text themselves; compact JSON otherwise
        Format::Text => serde_json::to_string(value)?,
    };
    println!("{}", rendered);
    Ok(())
}
