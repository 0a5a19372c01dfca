//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for strands
#[derive(Parser, Debug)]
#[command(name = "strands")]
#[command(author, version, about = "Terminal front-end for Strands agent sessions")]
#[command(long_about = r#"
Strands renders agent event-loop callbacks as terminal spinners, stores
notes and conversations in a local knowledge base, and keeps a welcome
scratchpad for the next session.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./strands.toml      Project-level config
3. ~/.config/strands/config.toml   Global config

Example:
  strands replay session.jsonl --pace-ms 20
  strands store "Use tokio::fs for the knowledge base" --title "Decision"
  strands welcome edit --content "Next: finish the replay tests"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Knowledge base id (overrides the configured one)
    #[arg(long = "kb", value_name = "ID", env = "STRANDS_KNOWLEDGE_BASE_ID", global = true)]
    pub knowledge_base_id: Option<String>,

    /// System prompt (overrides the configured one and `.prompt`)
    #[arg(
        long,
        value_name = "TEXT",
        env = "STRANDS_SYSTEM_PROMPT",
        hide_env_values = true,
        global = true
    )]
    pub system_prompt: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a recorded callback session (JSONL, `-` for stdin)
    Replay {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Delay between records in milliseconds
        #[arg(long, value_name = "MS", default_value_t = 0)]
        pace_ms: u64,
    },

    /// View or edit the welcome text
    Welcome {
        /// `view` or `edit`
        #[arg(default_value = "view")]
        action: String,

        /// New welcome text (required for `edit`)
        #[arg(long)]
        content: Option<String>,
    },

    /// Store content in the knowledge base (`-` reads stdin)
    Store {
        content: String,

        #[arg(long)]
        title: Option<String>,
    },

    /// Store a user/assistant exchange in the knowledge base
    StoreConversation {
        /// What the user asked
        #[arg(long)]
        user: String,

        /// File holding the assistant's reply as one JSON chat message
        #[arg(long, value_name = "FILE")]
        response: Option<PathBuf>,
    },

    /// Print the resolved system prompt
    Prompt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["strands"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["strands", "-vv", "replay", "s.jsonl", "--pace-ms", "15"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Replay { file, pace_ms }) => {
                assert_eq!(file, PathBuf::from("s.jsonl"));
                assert_eq!(pace_ms, 15);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_welcome_defaults_to_view() {
        let cli = Cli::try_parse_from(["strands", "welcome"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Welcome { ref action, content: None }) if action == "view"
        ));
    }

    #[test]
    fn test_store_with_global_kb_flag() {
        let cli =
            Cli::try_parse_from(["strands", "store", "note", "--kb", "KB1", "--title", "T"])
                .unwrap();
        assert_eq!(cli.knowledge_base_id.as_deref(), Some("KB1"));
        assert!(matches!(
            cli.command,
            Some(Command::Store { ref content, title: Some(ref t) }) if content == "note" && t == "T"
        ));
    }

    #[test]
    fn test_system_prompt_after_subcommand() {
        let cli = Cli::try_parse_from(["strands", "prompt", "--system-prompt", "Be terse."])
            .unwrap();
        assert!(matches!(cli.command, Some(Command::Prompt)));
        assert_eq!(cli.system_prompt.as_deref(), Some("Be terse."));
    }

    #[test]
    fn test_store_conversation_subcommand_name() {
        let cli = Cli::try_parse_from(["strands", "store-conversation", "--user", "hi"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::StoreConversation { ref user, response: None }) if user == "hi"
        ));
    }
}
