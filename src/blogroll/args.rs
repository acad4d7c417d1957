use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogroll")]
#[command(about = "Browse, filter and search a blog listing", long_about = None)]
#[command(version = env!("BLOGROLL_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file with posts and categories (overrides config data_file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts
    #[command(alias = "ls")]
    List {
        /// Only show posts in this category ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show posts whose title, content or author contain this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List known categories
    #[command(alias = "cats")]
    Categories,

    /// Write a new post for this session and show the resulting listing
    #[command(alias = "n")]
    Add {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        author: String,

        /// Category the post is filed under
        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        content: String,

        /// Short summary (generated from content when omitted)
        #[arg(long)]
        excerpt: Option<String>,

        /// Active category filter while adding
        #[arg(long)]
        filter: Option<String>,

        /// Active search term while adding
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Read events from stdin, one per line:
    /// `category <label>`, `search [term]`, `submit <json>`, `show`
    Session,
}
