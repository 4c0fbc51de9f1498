//! `crm`: terminal client for the pharma CRM demo.
//!
//! # Usage
//!
//! ```text
//! crm login --email rep@example.com --password anything
//! crm customers --search ankara --type doctor --status active
//! crm update-customer 2 --city Izmir --clear notes
//! crm visits
//! crm update-visit 1 --time 15:00 --priority high
//! crm complete-visit 1
//! crm --url http://localhost:3000 dashboard
//! ```

mod client;
mod filter;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use client::{ApiClient, ApiConfig};
use crm_core::{
  customer::{CustomerPatch, CustomerStatus, CustomerType, NewCustomer},
  visit::{NewVisit, Priority, VisitPatch, VisitStatus},
};
use filter::{CustomerFilter, VisitBoard};
use serde::Deserialize;
use session::{Session, SessionStore};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "crm", about = "Terminal client for the pharma CRM demo")]
struct Args {
  /// Path to a TOML config file (url, api_prefix, session_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the CRM server (default: http://localhost:3000).
  #[arg(long, env = "CRM_URL")]
  url: Option<String>,

  /// Path the server mounts the API under (default: /api).
  #[arg(long, env = "CRM_API_PREFIX")]
  api_prefix: Option<String>,

  /// Where the login token is kept (default: ~/.crm-session).
  #[arg(long, env = "CRM_SESSION")]
  session_file: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Log in with any non-empty email and password.
  Login {
    #[arg(long)]
    email:    String,
    #[arg(long)]
    password: String,
  },
  /// Forget the stored session.
  Logout,
  #[command(flatten)]
  Gated(GatedCommand),
}

/// Commands that need a stored session.
#[derive(Subcommand, Debug)]
enum GatedCommand {
  /// Show the logged-in user.
  Whoami,
  /// List customers, optionally filtered.
  Customers {
    /// Matches name, district or city, ignoring case.
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long = "type")]
    kind:   Option<CustomerType>,
    #[arg(long)]
    status: Option<CustomerStatus>,
  },
  /// Show one customer.
  Customer { id: String },
  /// Create a customer.
  AddCustomer(CustomerArgs),
  /// Change some fields of a customer.
  UpdateCustomer {
    id:      String,
    #[command(flatten)]
    changes: CustomerChanges,
  },
  /// Delete a customer.
  DeleteCustomer { id: String },
  /// List visits with planned/completed counts.
  Visits,
  /// Show one visit.
  Visit { id: String },
  /// Plan a visit.
  AddVisit(VisitArgs),
  /// Change some fields of a visit.
  UpdateVisit {
    id:      String,
    #[command(flatten)]
    changes: VisitChanges,
  },
  /// Delete a visit.
  DeleteVisit { id: String },
  /// Mark a visit completed.
  CompleteVisit { id: String },
  /// Mark a visit cancelled.
  CancelVisit { id: String },
  /// Show dashboard figures and recent activity.
  Dashboard,
}

#[derive(ClapArgs, Debug)]
struct CustomerArgs {
  #[arg(long)]
  name:           String,
  #[arg(long = "type")]
  kind:           CustomerType,
  #[arg(long)]
  specialization: Option<String>,
  #[arg(long)]
  hospital:       Option<String>,
  #[arg(long)]
  owner:          Option<String>,
  #[arg(long, default_value = "")]
  district:       String,
  #[arg(long, default_value = "")]
  city:           String,
  #[arg(long, default_value = "")]
  phone:          String,
  #[arg(long, default_value = "")]
  email:          String,
  #[arg(long)]
  notes:          Option<String>,
}

impl From<CustomerArgs> for NewCustomer {
  fn from(a: CustomerArgs) -> Self {
    NewCustomer {
      specialization: a.specialization,
      hospital: a.hospital,
      owner: a.owner,
      district: a.district,
      city: a.city,
      phone: a.phone,
      email: a.email,
      notes: a.notes,
      ..NewCustomer::new(a.name, a.kind)
    }
  }
}

#[derive(ClapArgs, Debug)]
struct VisitArgs {
  #[arg(long)]
  customer_name: String,
  #[arg(long)]
  customer_type: CustomerType,
  #[arg(long, default_value = "")]
  location:      String,
  #[arg(long)]
  date:          String,
  #[arg(long)]
  time:          String,
  #[arg(long)]
  notes:         Option<String>,
  #[arg(long)]
  priority:      Option<Priority>,
  /// Expected length in minutes.
  #[arg(long)]
  duration:      Option<u32>,
}

impl From<VisitArgs> for NewVisit {
  fn from(a: VisitArgs) -> Self {
    NewVisit {
      location: a.location,
      date: a.date,
      time: a.time,
      notes: a.notes,
      priority: a.priority,
      estimated_duration: a.duration,
      ..NewVisit::new(a.customer_name, a.customer_type)
    }
  }
}

// ─── Updates ──────────────────────────────────────────────────────────────────

/// `Some(Some(v))` to set, `Some(None)` to clear, `None` to leave alone.
fn set_or_clear<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
  match value {
    Some(v) => Some(Some(v)),
    None => clear.then_some(None),
  }
}

/// Optional customer fields that `--clear` can remove.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CustomerField {
  Specialization,
  Hospital,
  Owner,
  Notes,
}

#[derive(ClapArgs, Debug)]
struct CustomerChanges {
  #[arg(long)]
  name:           Option<String>,
  #[arg(long = "type")]
  kind:           Option<CustomerType>,
  #[arg(long)]
  specialization: Option<String>,
  #[arg(long)]
  hospital:       Option<String>,
  #[arg(long)]
  owner:          Option<String>,
  #[arg(long)]
  district:       Option<String>,
  #[arg(long)]
  city:           Option<String>,
  #[arg(long)]
  phone:          Option<String>,
  #[arg(long)]
  email:          Option<String>,
  #[arg(long)]
  notes:          Option<String>,
  #[arg(long)]
  status:         Option<CustomerStatus>,
  /// Remove an optional field; may be repeated.
  #[arg(long, value_enum)]
  clear:          Vec<CustomerField>,
}

impl From<CustomerChanges> for CustomerPatch {
  fn from(a: CustomerChanges) -> Self {
    let cleared = |field| a.clear.contains(&field);
    CustomerPatch {
      specialization: set_or_clear(
        a.specialization,
        cleared(CustomerField::Specialization),
      ),
      hospital: set_or_clear(a.hospital, cleared(CustomerField::Hospital)),
      owner: set_or_clear(a.owner, cleared(CustomerField::Owner)),
      notes: set_or_clear(a.notes, cleared(CustomerField::Notes)),
      name: a.name,
      kind: a.kind,
      district: a.district,
      city: a.city,
      phone: a.phone,
      email: a.email,
      status: a.status,
    }
  }
}

/// Optional visit fields that `--clear` can remove.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VisitField {
  Notes,
  Priority,
  Duration,
}

#[derive(ClapArgs, Debug)]
struct VisitChanges {
  #[arg(long)]
  customer_name: Option<String>,
  #[arg(long)]
  customer_type: Option<CustomerType>,
  #[arg(long)]
  location:      Option<String>,
  #[arg(long)]
  date:          Option<String>,
  #[arg(long)]
  time:          Option<String>,
  #[arg(long)]
  status:        Option<VisitStatus>,
  #[arg(long)]
  notes:         Option<String>,
  #[arg(long)]
  priority:      Option<Priority>,
  /// Expected length in minutes.
  #[arg(long)]
  duration:      Option<u32>,
  /// Remove an optional field; may be repeated.
  #[arg(long, value_enum)]
  clear:         Vec<VisitField>,
}

impl From<VisitChanges> for VisitPatch {
  fn from(a: VisitChanges) -> Self {
    let cleared = |field| a.clear.contains(&field);
    VisitPatch {
      notes: set_or_clear(a.notes, cleared(VisitField::Notes)),
      priority: set_or_clear(a.priority, cleared(VisitField::Priority)),
      estimated_duration: set_or_clear(a.duration, cleared(VisitField::Duration)),
      customer_name: a.customer_name,
      customer_type: a.customer_type,
      location: a.location,
      date: a.date,
      time: a.time,
      status: a.status,
    }
  }
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:          String,
  #[serde(default)]
  api_prefix:   Option<String>,
  #[serde(default)]
  session_file: Option<PathBuf>,
}

fn default_session_file() -> PathBuf {
  std::env::var("HOME")
    .map(|home| PathBuf::from(home).join(".crm-session"))
    .unwrap_or_else(|_| PathBuf::from(".crm-session"))
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let base_url = args
    .url
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| "http://localhost:3000".to_string());
  let api_prefix = args
    .api_prefix
    .or(file_cfg.api_prefix)
    .unwrap_or_else(|| "/api".to_string());
  let sessions = SessionStore::new(
    args
      .session_file
      .or(file_cfg.session_file)
      .unwrap_or_else(default_session_file),
  );

  match args.command {
    Command::Login { email, password } => {
      let session = sessions.login(&email, &password)?;
      println!("Logged in as {} <{}>", session.user.name, session.user.email);
      println!("Session stored in {}", sessions.path().display());
    }
    Command::Logout => {
      sessions.logout()?;
      println!("Logged out");
    }
    Command::Gated(command) => {
      let session = sessions
        .restore()?
        .context("not logged in; run `crm login` first")?;
      let client = ApiClient::new(ApiConfig { base_url, api_prefix })?;
      run(command, &client, &session).await?;
    }
  }
  Ok(())
}

async fn run(
  command: GatedCommand,
  client: &ApiClient,
  session: &Session,
) -> Result<()> {
  match command {
    GatedCommand::Whoami => {
      let user = &session.user;
      println!("{} <{}> ({:?})", user.name, user.email, user.role);
      println!("token: {}", session.token);
    }
    GatedCommand::Customers { search, kind, status } => {
      let customers = client.list_customers().await?;
      let filter = CustomerFilter { query: search, kind, status };
      let shown = filter.apply(&customers);
      if shown.is_empty() {
        println!("No customers match.");
      }
      for c in shown {
        println!("{}", render::customer_line(c));
      }
    }
    GatedCommand::Customer { id } => {
      let customer = client.get_customer(&id).await?;
      print!("{}", render::customer_detail(&customer));
    }
    GatedCommand::AddCustomer(a) => {
      let created = client.create_customer(&NewCustomer::from(a)).await?;
      println!("{}", render::customer_line(&created));
    }
    GatedCommand::UpdateCustomer { id, changes } => {
      let patch = CustomerPatch::from(changes);
      if patch == CustomerPatch::default() {
        bail!("nothing to update; pass at least one field");
      }
      let updated = client.update_customer(&id, &patch).await?;
      print!("{}", render::customer_detail(&updated));
    }
    GatedCommand::DeleteCustomer { id } => {
      println!("{}", client.delete_customer(&id).await?);
    }
    GatedCommand::Visits => {
      let visits = client.list_visits().await?;
      let board = VisitBoard::new(&visits);
      println!(
        "{} planned, {} completed",
        board.planned.len(),
        board.completed.len()
      );
      for v in &visits {
        println!("{}", render::visit_line(v));
      }
    }
    GatedCommand::Visit { id } => {
      let visit = client.get_visit(&id).await?;
      println!("{}", render::visit_line(&visit));
    }
    GatedCommand::AddVisit(a) => {
      let created = client.create_visit(&NewVisit::from(a)).await?;
      println!("{}", render::visit_line(&created));
    }
    GatedCommand::UpdateVisit { id, changes } => {
      let patch = VisitPatch::from(changes);
      if patch == VisitPatch::default() {
        bail!("nothing to update; pass at least one field");
      }
      let visit = client.update_visit(&id, &patch).await?;
      println!("{}", render::visit_line(&visit));
    }
    GatedCommand::DeleteVisit { id } => {
      println!("{}", client.delete_visit(&id).await?);
    }
    GatedCommand::CompleteVisit { id } => {
      let visit = client.complete_visit(&id).await?;
      println!("{}", render::visit_line(&visit));
    }
    GatedCommand::CancelVisit { id } => {
      let patch = VisitPatch::status(VisitStatus::Cancelled);
      let visit = client.update_visit(&id, &patch).await?;
      println!("{}", render::visit_line(&visit));
    }
    GatedCommand::Dashboard => {
      let stats = client.dashboard_stats().await?;
      let activities = client.recent_activities().await?;
      print!("{}", render::dashboard(&stats, &activities));
    }
  }
  Ok(())
}
