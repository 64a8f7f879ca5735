#![forbid(unsafe_code)]

use chrono::Local;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use crewdesk_core::{
    env_trimmed, ErrorCode, ExitCode, ServiceConfig, ENV_CREWDESK_LOG_LEVEL,
    ENV_CREWDESK_MEMBERSHIP_PATH,
};
use crewdesk_model::{
    parse_indent_number, parse_username, Candidate, DocumentEntry, Lead, LeavingRecord, Posting,
    UserAccount, VendorEntry, VideoEntry,
};
use crewdesk_query::schema::{call_tracker, joining, leaving, users};
use crewdesk_query::{apply, classify_postings, load_records, FilterParams, Tab};
use crewdesk_store::{
    FileMembershipStore, MembershipStore, SheetClient, SheetError, SheetErrorCode,
    StoreMetricsCollector,
};
use crewdesk_writeback::{
    compose_call_outcome, compose_document_entry, compose_file_upload, compose_joining_completion,
    compose_lead_bulk_import, compose_lead_intake, compose_leaving_archive, compose_user_tombstone,
    compose_vendor_entry, ChecklistSubmission, DocumentForm, LeadForm, SubmitGuard, VendorForm,
    WriteFlow,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "crewdesk")]
#[command(about = "Crewdesk HR-operations CLI")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TabCli {
    Pending,
    History,
    All,
}

impl From<TabCli> for Tab {
    fn from(tab: TabCli) -> Self {
        match tab {
            TabCli::Pending => Tab::Pending,
            TabCli::History => Tab::History,
            TabCli::All => Tab::All,
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
struct ViewArgs {
    #[arg(long, value_enum, default_value_t = TabCli::Pending)]
    tab: TabCli,
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Joining-workflow candidates.
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
    /// Call-tracker leads.
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    /// Offboarding records.
    Leaving {
        #[command(subcommand)]
        command: LeavingCommand,
    },
    /// Social-site postings.
    Postings {
        #[command(subcommand)]
        command: PostingsCommand,
    },
    /// Dashboard user accounts.
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
    /// Vendor registry.
    Vendors {
        #[command(subcommand)]
        command: VendorsCommand,
    },
    /// Document registry.
    Docs {
        #[command(subcommand)]
        command: DocsCommand,
    },
    /// Training-video registry.
    Videos {
        #[command(subcommand)]
        command: VideosCommand,
    },
}

#[derive(Subcommand)]
enum CandidatesCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        designation: String,
    },
    /// Submit the joining checklist for a candidate, completing its step.
    Complete {
        #[arg(long)]
        indent: String,
        #[arg(long = "item", required = true)]
        items: Vec<String>,
        #[arg(long, default_value = "")]
        remarks: String,
    },
}

#[derive(Subcommand)]
enum LeadsCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, default_value = "")]
        post: String,
    },
    Add {
        #[arg(long)]
        lead_number: String,
        #[arg(long)]
        indent: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        post: String,
        #[arg(long, default_value = "")]
        source: String,
    },
    /// Record the call as done for a lead.
    CallDone {
        #[arg(long)]
        lead_number: String,
    },
    /// Bulk-import leads from a JSON array file.
    Import {
        #[arg(long)]
        file: PathBuf,
    },
}

/// JSON shape of one imported lead.
#[derive(Debug, Clone, serde::Deserialize)]
struct LeadImport {
    #[serde(default)]
    lead_number: String,
    #[serde(default)]
    indent_number: String,
    candidate_name: String,
    phone: String,
    #[serde(default)]
    post: String,
    #[serde(default)]
    source: String,
}

impl From<LeadImport> for LeadForm {
    fn from(lead: LeadImport) -> Self {
        Self {
            lead_number: lead.lead_number,
            indent_number: lead.indent_number,
            candidate_name: lead.candidate_name,
            phone: lead.phone,
            post: lead.post,
            source: lead.source,
        }
    }
}

#[derive(Subcommand)]
enum LeavingCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    Archive {
        #[arg(long)]
        employee_id: String,
    },
}

#[derive(Subcommand)]
enum PostingsCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Move a posting to the locally persisted history set.
    Archive {
        #[arg(long)]
        id: String,
    },
}

#[derive(Subcommand)]
enum UsersCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Tombstone a user account; the sheet row is kept.
    Delete {
        #[arg(long)]
        username: String,
    },
}

#[derive(Subcommand)]
enum VendorsCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, default_value = "")]
        category: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        contact: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        address: String,
    },
}

#[derive(Subcommand)]
enum DocsCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Upload a file, then register it with the returned URL.
    Upload {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        document_id: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        uploaded_by: String,
        #[arg(long, default_value = "application/pdf")]
        mime_type: String,
    },
}

#[derive(Subcommand)]
enum VideosCommand {
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = env_trimmed(ENV_CREWDESK_LOG_LEVEL)
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn membership_store() -> FileMembershipStore {
    let path = env_trimmed(ENV_CREWDESK_MEMBERSHIP_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".crewdesk").join("posting_history.json"));
    FileMembershipStore::new(path)
}

fn view_params(view: &ViewArgs) -> FilterParams {
    FilterParams::tab(view.tab.into()).with_search(view.search.clone())
}

fn print_payload(json_mode: bool, payload: Value) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else if let Some(rows) = payload.get("records").and_then(Value::as_array) {
        for row in rows {
            println!("{row}");
        }
        println!("{} record(s)", rows.len());
    } else if let Some(message) = payload.get("message").and_then(Value::as_str) {
        println!("{message}");
    } else {
        println!("{payload}");
    }
}

fn list_payload<T: serde::Serialize>(records: &[T]) -> Result<Value, SheetError> {
    let rows = serde_json::to_value(records)
        .map_err(|err| SheetError::new(SheetErrorCode::Internal, err.to_string()))?;
    Ok(json!({ "records": rows }))
}

fn run(cli: &Cli, client: &SheetClient) -> Result<Value, SheetError> {
    let now = Local::now().naive_local();
    let guard = SubmitGuard::new();

    match &cli.command {
        Commands::Candidates { command } => match command {
            CandidatesCommand::List {
                view,
                department,
                designation,
            } => {
                let records: Vec<Candidate> = load_records(client)?;
                let params = view_params(view)
                    .with_category("department", department.clone())
                    .with_category("designation", designation.clone());
                list_payload(&apply(&records, &params))
            }
            CandidatesCommand::Complete {
                indent,
                items,
                remarks,
            } => {
                let _token = begin_submit(&guard)?;
                let indent = parse_indent_number(indent)
                    .map_err(|err| SheetError::new(SheetErrorCode::Validation, err.to_string()))?;
                let records: Vec<Candidate> = load_records(client)?;
                let candidate = records
                    .iter()
                    .find(|c| c.indent_number.trim() == indent.as_str())
                    .cloned()
                    .ok_or_else(|| {
                        SheetError::new(
                            SheetErrorCode::NotFound,
                            format!("candidate '{indent}' was not found; it may have been deleted or modified"),
                        )
                    })?;
                let submission = ChecklistSubmission {
                    items: items.clone(),
                    remarks: remarks.clone(),
                };
                let mut flow = WriteFlow::new(client, client);
                flow.update_by_key(
                    &joining::SCHEMA,
                    joining::INDENT_NUMBER,
                    indent.as_str(),
                    |row_index, _row| {
                        compose_joining_completion(&candidate, row_index, &submission, now)
                    },
                )?;
                let refreshed: Vec<Candidate> = load_records(client)?;
                Ok(json!({
                    "message": format!("checklist recorded for {indent}"),
                    "pending": apply(&refreshed, &FilterParams::tab(Tab::Pending)).len(),
                }))
            }
        },
        Commands::Leads { command } => match command {
            LeadsCommand::List { view, post } => {
                let records: Vec<Lead> = load_records(client)?;
                let params = view_params(view).with_category("post", post.clone());
                list_payload(&apply(&records, &params))
            }
            LeadsCommand::Add {
                lead_number,
                indent,
                name,
                phone,
                post,
                source,
            } => {
                use crewdesk_store::RowSink;
                let _token = begin_submit(&guard)?;
                let form = LeadForm {
                    lead_number: lead_number.clone(),
                    indent_number: indent.clone(),
                    candidate_name: name.clone(),
                    phone: phone.clone(),
                    post: post.clone(),
                    source: source.clone(),
                };
                let request = compose_lead_intake(&form, now)?;
                client.execute(&request)?;
                let refreshed: Vec<Lead> = load_records(client)?;
                Ok(json!({
                    "message": format!("lead {lead_number} recorded"),
                    "pending": apply(&refreshed, &FilterParams::tab(Tab::Pending)).len(),
                }))
            }
            LeadsCommand::Import { file } => {
                use crewdesk_store::RowSink;
                let _token = begin_submit(&guard)?;
                let raw = std::fs::read_to_string(file)
                    .map_err(|err| SheetError::new(SheetErrorCode::Io, err.to_string()))?;
                let imports: Vec<LeadImport> = serde_json::from_str(&raw).map_err(|err| {
                    SheetError::new(
                        SheetErrorCode::Validation,
                        format!("import file is not a JSON lead array: {err}"),
                    )
                })?;
                let forms: Vec<LeadForm> = imports.into_iter().map(LeadForm::from).collect();
                let request = compose_lead_bulk_import(&forms, now)?;
                client.execute(&request)?;
                Ok(json!({ "message": format!("{} lead(s) imported", forms.len()) }))
            }
            LeadsCommand::CallDone { lead_number } => {
                let _token = begin_submit(&guard)?;
                let records: Vec<Lead> = load_records(client)?;
                let lead = records
                    .iter()
                    .find(|l| l.lead_number.trim() == lead_number.trim())
                    .cloned()
                    .ok_or_else(|| {
                        SheetError::new(
                            SheetErrorCode::NotFound,
                            format!("lead '{lead_number}' was not found; it may have been deleted or modified"),
                        )
                    })?;
                let mut flow = WriteFlow::new(client, client);
                flow.update_by_key(
                    &call_tracker::SCHEMA,
                    call_tracker::LEAD_NUMBER,
                    lead_number,
                    |row_index, _row| compose_call_outcome(&lead, row_index, now),
                )?;
                Ok(json!({ "message": format!("call recorded for {lead_number}") }))
            }
        },
        Commands::Leaving { command } => match command {
            LeavingCommand::List { view } => {
                let records: Vec<LeavingRecord> = load_records(client)?;
                list_payload(&apply(&records, &view_params(view)))
            }
            LeavingCommand::Archive { employee_id } => {
                let _token = begin_submit(&guard)?;
                let records: Vec<LeavingRecord> = load_records(client)?;
                let record = records
                    .iter()
                    .find(|r| r.employee_id.trim() == employee_id.trim())
                    .cloned()
                    .ok_or_else(|| {
                        SheetError::new(
                            SheetErrorCode::NotFound,
                            format!("leaving record '{employee_id}' was not found; it may have been deleted or modified"),
                        )
                    })?;
                let mut flow = WriteFlow::new(client, client);
                flow.update_by_key(
                    &leaving::SCHEMA,
                    leaving::EMPLOYEE_ID,
                    employee_id,
                    |row_index, _row| compose_leaving_archive(&record, row_index),
                )?;
                Ok(json!({ "message": format!("leaving record {employee_id} archived") }))
            }
        },
        Commands::Postings { command } => match command {
            PostingsCommand::List { view } => {
                let records: Vec<Posting> = load_records(client)?;
                let history_ids = membership_store().load()?;
                let classified = classify_postings(records, &history_ids);
                list_payload(&apply(&classified, &view_params(view)))
            }
            PostingsCommand::Archive { id } => {
                membership_store().insert(id)?;
                Ok(json!({ "message": format!("posting {id} moved to history") }))
            }
        },
        Commands::Users { command } => match command {
            UsersCommand::List { view } => {
                let records: Vec<UserAccount> = load_records(client)?;
                list_payload(&apply(&records, &view_params(view)))
            }
            UsersCommand::Delete { username } => {
                let _token = begin_submit(&guard)?;
                let username = parse_username(username)
                    .map_err(|err| SheetError::new(SheetErrorCode::Validation, err.to_string()))?;
                let records: Vec<UserAccount> = load_records(client)?;
                let user = records
                    .iter()
                    .find(|u| u.username.trim() == username.as_str())
                    .cloned()
                    .ok_or_else(|| {
                        SheetError::new(
                            SheetErrorCode::NotFound,
                            format!("user '{username}' was not found; it may have been deleted or modified"),
                        )
                    })?;
                let mut flow = WriteFlow::new(client, client);
                flow.update_by_key(
                    &users::SCHEMA,
                    users::USERNAME,
                    username.as_str(),
                    |row_index, _row| compose_user_tombstone(&user, row_index),
                )?;
                Ok(json!({ "message": format!("user {username} deleted (tombstoned)") }))
            }
        },
        Commands::Vendors { command } => match command {
            VendorsCommand::List { view, category } => {
                let records: Vec<VendorEntry> = load_records(client)?;
                let params = view_params(view).with_category("category", category.clone());
                list_payload(&apply(&records, &params))
            }
            VendorsCommand::Add {
                name,
                contact,
                phone,
                category,
                address,
            } => {
                use crewdesk_store::RowSink;
                let _token = begin_submit(&guard)?;
                let form = VendorForm {
                    vendor_name: name.clone(),
                    contact_person: contact.clone(),
                    phone: phone.clone(),
                    category: category.clone(),
                    address: address.clone(),
                };
                let request = compose_vendor_entry(&form, now)?;
                client.execute(&request)?;
                Ok(json!({ "message": format!("vendor {name} registered") }))
            }
        },
        Commands::Docs { command } => match command {
            DocsCommand::List { view } => {
                let records: Vec<DocumentEntry> = load_records(client)?;
                list_payload(&apply(&records, &view_params(view)))
            }
            DocsCommand::Upload {
                file,
                title,
                document_id,
                category,
                uploaded_by,
                mime_type,
            } => {
                use crewdesk_store::RowSink;
                let _token = begin_submit(&guard)?;
                let bytes = std::fs::read(file)
                    .map_err(|err| SheetError::new(SheetErrorCode::Io, err.to_string()))?;
                let file_name = file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("upload.bin");
                let upload = compose_file_upload(
                    file_name,
                    mime_type,
                    &bytes,
                    &client.config().upload_folder_id,
                )?;
                let receipt = client.execute(&upload)?;
                let file_url = receipt.file_url.ok_or_else(|| {
                    SheetError::new(
                        SheetErrorCode::Application,
                        "upload succeeded but no file URL was returned",
                    )
                })?;
                let form = DocumentForm {
                    document_id: document_id.clone(),
                    title: title.clone(),
                    category: category.clone(),
                    uploaded_by: uploaded_by.clone(),
                };
                let request = compose_document_entry(&form, &file_url, now)?;
                client.execute(&request)?;
                Ok(json!({
                    "message": format!("document '{title}' uploaded"),
                    "file_url": file_url,
                }))
            }
        },
        Commands::Videos { command } => match command {
            VideosCommand::List { view } => {
                let records: Vec<VideoEntry> = load_records(client)?;
                list_payload(&apply(&records, &view_params(view)))
            }
        },
    }
}

fn begin_submit(guard: &SubmitGuard) -> Result<crewdesk_writeback::SubmitToken, SheetError> {
    guard.begin().ok_or_else(|| {
        SheetError::new(
            SheetErrorCode::Validation,
            "a submission is already in flight",
        )
    })
}

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ProcessExitCode::from(ExitCode::Usage as u8);
        }
    };
    let metrics = Arc::new(StoreMetricsCollector::default());
    let client = SheetClient::new(config).with_instrumentation(metrics.clone());

    match run(&cli, &client) {
        Ok(mut payload) => {
            if cli.json {
                if let Value::Object(map) = &mut payload {
                    map.insert(
                        "metrics".to_string(),
                        serde_json::to_value(metrics.snapshot()).unwrap_or(Value::Null),
                    );
                }
            }
            print_payload(cli.json, payload);
            ProcessExitCode::from(ExitCode::Success as u8)
        }
        Err(err) => {
            let code: ErrorCode = err.code.as_error_code();
            if cli.json {
                let machine = crewdesk_core::MachineError::new(err.code.as_str(), &err.message)
                    .with_detail("error_code", code.as_str());
                println!(
                    "{}",
                    serde_json::to_string_pretty(&machine).unwrap_or_default()
                );
            } else {
                eprintln!("error: {err}");
            }
            ProcessExitCode::from(code.exit_code() as u8)
        }
    }
}
