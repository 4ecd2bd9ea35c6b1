mod storage;
mod transport;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use session::api::DEFAULT_API_URL;
use session::types::{NewComment, PostDraft, ProjectDraft};
use session::validate::{self, PostForm, ProjectForm, RegisterForm};
use session::{ApiClient, ApiError, ContactMessage, SessionStore};
use tracing_subscriber::EnvFilter;

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid input: {0}")]
    Invalid(&'static str),
    #[error("not signed in; run `portfolio-cli login` first")]
    NotSignedIn,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio-cli", about = "Portfolio backend CLI: session, projects, blog, contact")]
struct Cli {
    #[arg(long, env = "PORTFOLIO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory holding the `token` and `user` session files.
    #[arg(long, env = "PORTFOLIO_STATE_DIR", default_value = ".portfolio")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTFOLIO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTFOLIO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    /// Re-fetch the signed-in profile from the backend.
    Whoami,
    /// Show the locally stored session without touching the network.
    Status,
    Projects(ProjectsCommand),
    Blog(BlogCommand),
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Args, Debug)]
struct ProjectsCommand {
    #[command(subcommand)]
    command: ProjectsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectsSubcommand {
    List,
    Get { id: String },
    Create(ProjectFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
    Delete { id: String },
}

/// Project fields; on update, omitted flags keep the current value.
#[derive(Args, Debug, Default)]
struct ProjectFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Comma-separated list.
    #[arg(long)]
    technologies: Option<String>,
    #[arg(long)]
    live_url: Option<String>,
    #[arg(long)]
    github_url: Option<String>,
    #[arg(long)]
    image: Option<String>,
}

impl ProjectFields {
    fn apply(self, form: &mut ProjectForm) {
        overlay(&mut form.title, self.title);
        overlay(&mut form.description, self.description);
        overlay(&mut form.technologies, self.technologies);
        overlay(&mut form.live_url, self.live_url);
        overlay(&mut form.github_url, self.github_url);
        overlay(&mut form.image, self.image);
    }
}

#[derive(Args, Debug)]
struct BlogCommand {
    #[command(subcommand)]
    command: BlogSubcommand,
}

#[derive(Subcommand, Debug)]
enum BlogSubcommand {
    List,
    Get { id: String },
    Create(PostFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: PostFields,
    },
    Delete { id: String },
    Comment {
        id: String,
        #[arg(long)]
        content: String,
    },
}

/// Post fields; on update, omitted flags keep the current value.
#[derive(Args, Debug, Default)]
struct PostFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    content: Option<String>,
    /// Comma-separated list.
    #[arg(long)]
    tags: Option<String>,
    #[arg(long)]
    author: Option<String>,
}

impl PostFields {
    fn apply(self, form: &mut PostForm) {
        overlay(&mut form.title, self.title);
        overlay(&mut form.excerpt, self.excerpt);
        overlay(&mut form.content, self.content);
        overlay(&mut form.tags, self.tags);
        overlay(&mut form.author, self.author);
    }
}

fn overlay(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

struct CliContext {
    client: ApiClient<ReqwestTransport>,
    store: SessionStore<FileStorage>,
}

impl CliContext {
    fn bearer(&self) -> Option<&str> {
        self.store.token()
    }

    fn require_session(&self) -> Result<(), CliError> {
        if self.store.is_authenticated() { Ok(()) } else { Err(CliError::NotSignedIn) }
    }

    /// Pass a result through, dropping the stored session on a 401.
    fn checked<T>(&mut self, result: Result<T, ApiError>) -> Result<T, CliError> {
        result.map_err(|err| {
            if err.is_unauthorized() {
                self.store.invalidate();
            }
            CliError::Api(err)
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();

    let http = reqwest::Client::builder().build()?;
    let mut store = SessionStore::new(FileStorage::new(cli.state_dir));
    store.init();
    let mut ctx = CliContext { client: ApiClient::new(cli.api_url, ReqwestTransport::new(http)), store };

    match cli.command {
        Command::Login { email, password } => run_login(&mut ctx, &email, &password).await,
        Command::Register { username, email, password } => {
            let form = RegisterForm { username, email, confirm_password: password.clone(), password };
            run_register(&mut ctx, &form).await
        }
        Command::Logout => {
            ctx.store.logout();
            println!("signed out");
            Ok(())
        }
        Command::Whoami => run_whoami(&mut ctx).await,
        Command::Status => {
            run_status(&ctx);
            Ok(())
        }
        Command::Projects(projects) => run_projects(&mut ctx, projects).await,
        Command::Blog(blog) => run_blog(&mut ctx, blog).await,
        Command::Contact { name, email, subject, message } => {
            let message = validate::contact(&ContactMessage { name, email, subject, message }).map_err(CliError::Invalid)?;
            let result = ctx.client.submit_contact(&message, ctx.bearer()).await;
            print_json(&ctx.checked(result)?)
        }
    }
}

async fn run_login(ctx: &mut CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let request = validate::login(email, password).map_err(CliError::Invalid)?;
    let user = ctx.store.login(&ctx.client, &request.email, &request.password).await?;
    println!("signed in as {}", user.username().or_else(|| user.email()).unwrap_or("(unnamed)"));
    Ok(())
}

async fn run_register(ctx: &mut CliContext, form: &RegisterForm) -> Result<(), CliError> {
    let request = validate::register(form).map_err(CliError::Invalid)?;
    let user = ctx.store.register(&ctx.client, &request).await?;
    println!("registered and signed in as {}", user.username().unwrap_or(&request.username));
    Ok(())
}

async fn run_whoami(ctx: &mut CliContext) -> Result<(), CliError> {
    let user = ctx.store.refresh_user(&ctx.client).await?.ok_or(CliError::NotSignedIn)?;
    print_json(&Value::Object(user.as_map().clone()))
}

fn run_status(ctx: &CliContext) {
    let dir = ctx.store.storage().dir().display();
    match ctx.store.user() {
        Some(user) => {
            let name = user.username().or_else(|| user.email()).unwrap_or("(unnamed)");
            println!("signed in as {name} (session in {dir})");
        }
        None => println!("anonymous (no session in {dir})"),
    }
}

async fn run_projects(ctx: &mut CliContext, projects: ProjectsCommand) -> Result<(), CliError> {
    match projects.command {
        ProjectsSubcommand::List => {
            let result = ctx.client.list_projects(ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        ProjectsSubcommand::Get { id } => {
            let result = ctx.client.get_project(&id, ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        ProjectsSubcommand::Create(fields) => {
            ctx.require_session()?;
            let mut form = ProjectForm::default();
            fields.apply(&mut form);
            let draft = validate::project(&form).map_err(CliError::Invalid)?;
            let result = ctx.client.create_project(&draft, ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        ProjectsSubcommand::Update { id, fields } => {
            ctx.require_session()?;
            let result = ctx.client.get_project(&id, ctx.bearer()).await;
            let current = ctx.checked(result)?;
            let mut form = ProjectForm::from_draft(&ProjectDraft::from_project(&current));
            fields.apply(&mut form);
            let draft = validate::project(&form).map_err(CliError::Invalid)?;
            let result = ctx.client.update_project(&id, &draft, ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        ProjectsSubcommand::Delete { id } => {
            ctx.require_session()?;
            let result = ctx.client.delete_project(&id, ctx.bearer()).await;
            print_json(&ctx.checked(result)?)
        }
    }
}

async fn run_blog(ctx: &mut CliContext, blog: BlogCommand) -> Result<(), CliError> {
    match blog.command {
        BlogSubcommand::List => {
            let result = ctx.client.list_posts(ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        BlogSubcommand::Get { id } => {
            let result = ctx.client.get_post(&id, ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        BlogSubcommand::Create(fields) => {
            ctx.require_session()?;
            let mut form = PostForm::default();
            fields.apply(&mut form);
            let draft = validate::post(&form).map_err(CliError::Invalid)?;
            let result = ctx.client.create_post(&draft, ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        BlogSubcommand::Update { id, fields } => {
            ctx.require_session()?;
            let result = ctx.client.get_post(&id, ctx.bearer()).await;
            let current = ctx.checked(result)?;
            let mut form = PostForm::from_draft(&PostDraft::from_post(&current));
            fields.apply(&mut form);
            let draft = validate::post(&form).map_err(CliError::Invalid)?;
            let result = ctx.client.update_post(&id, &draft, ctx.bearer()).await;
            print_json(&serde_json::to_value(ctx.checked(result)?)?)
        }
        BlogSubcommand::Delete { id } => {
            ctx.require_session()?;
            let result = ctx.client.delete_post(&id, ctx.bearer()).await;
            print_json(&ctx.checked(result)?)
        }
        BlogSubcommand::Comment { id, content } => {
            ctx.require_session()?;
            let content = validate::comment(&content).map_err(CliError::Invalid)?;
            let comment = NewComment::by(ctx.store.user(), content);
            let result = ctx.client.add_comment(&id, &comment, ctx.bearer()).await;
            print_json(&ctx.checked(result)?)
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
