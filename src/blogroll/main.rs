use blogroll::config::BlogConfig;
use blogroll::controller::ViewController;
use blogroll::error::{BlogError, Result};
use blogroll::provider::fs::JsonFileProvider;
use blogroll::provider::memory::StaticProvider;
use blogroll::provider::PostProvider;
use blogroll::validation::PostForm;
use clap::Parser;
use directories::ProjectDirs;
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{
    print_categories, print_field_errors, print_listing, print_success, print_warning,
};
use cli::session::{parse_event, SessionEvent};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => {}
        Err(BlogError::Validation(errors)) => {
            print_field_errors(&errors);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BLOGROLL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "blogroll=debug"
        } else {
            "blogroll=warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

struct AppContext {
    controller: ViewController,
    provider: Box<dyn PostProvider>,
}

async fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    // A failed load is not fatal: the listing renders its empty state.
    if let Err(e) = ctx.controller.load(ctx.provider.as_ref()).await {
        print_warning(&e.to_string());
    }

    match cli.command {
        Some(Commands::List { category, search }) => handle_list(&mut ctx, category, search),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Add {
            title,
            author,
            category,
            content,
            excerpt,
            filter,
            search,
        }) => {
            let mut form = PostForm::new(title, author, category, content);
            form.excerpt = excerpt;
            handle_add(&mut ctx, form, filter, search)
        }
        Some(Commands::Session) => handle_session(&mut ctx),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli);
    let config = BlogConfig::load(&config_dir)?;

    let data_file = cli
        .data
        .clone()
        .or_else(|| config.data_file_in(&config_dir));
    let provider: Box<dyn PostProvider> = match data_file {
        Some(path) => {
            let provider = JsonFileProvider::new(path);
            tracing::debug!(path = %provider.path().display(), "reading posts");
            Box::new(provider)
        }
        None => Box::new(StaticProvider::failing(
            "no data file given (use --data or set data_file in config.json)",
        )),
    };

    Ok(AppContext {
        controller: ViewController::new(config),
        provider,
    })
}

fn resolve_config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config {
        return dir.clone();
    }
    if let Ok(home) = std::env::var("BLOGROLL_HOME") {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "blogroll", "blogroll")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".blogroll"))
}

fn apply_filters(
    ctx: &mut AppContext,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    if let Some(category) = category {
        ctx.controller.change_category(&category)?;
    }
    if let Some(term) = search {
        ctx.controller.search(&term)?;
    }
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    apply_filters(ctx, category, search)?;
    print_listing(&ctx.controller.snapshot());
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    print_categories(&ctx.controller.snapshot());
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    form: PostForm,
    filter: Option<String>,
    search: Option<String>,
) -> Result<()> {
    apply_filters(ctx, filter, search)?;
    let post = ctx.controller.submit_post(form)?;
    print_success(&format!("Post added: {} ({})", post.title, post.slug));
    print_listing(&ctx.controller.snapshot());
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let event = match parse_event(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(message) => {
                print_warning(&message);
                continue;
            }
        };

        match event {
            SessionEvent::Category(label) => ctx.controller.change_category(&label)?,
            SessionEvent::Search(term) => ctx.controller.search(&term)?,
            SessionEvent::Submit(form) => match ctx.controller.submit_post(form) {
                Ok(post) => print_success(&format!("Post added: {} ({})", post.title, post.slug)),
                Err(BlogError::Validation(errors)) => print_field_errors(&errors),
                Err(e) => return Err(e),
            },
            SessionEvent::Show => print_listing(&ctx.controller.snapshot()),
        }
    }

    print_listing(&ctx.controller.snapshot());
    Ok(())
}
