//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use advisor_application::{InventoryStore, RecommendVehicles};
use advisor_domain::Message;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;

const HISTORY_CAPACITY: usize = 500;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Inventory,
    Clear,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; `None` for anything else
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let command = line.split_whitespace().next().unwrap_or(line);
        Some(match command {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/inventory" | "/inv" => ReplCommand::Inventory,
            "/clear" | "/reset" => ReplCommand::Clear,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    recommend: Arc<RecommendVehicles>,
    store: Arc<InventoryStore>,
    progress: Option<Arc<ProgressReporter>>,
    /// Completed (question, answer) turns
    turns: Vec<(String, String)>,
}

impl ChatRepl {
    pub fn new(recommend: Arc<RecommendVehicles>, store: Arc<InventoryStore>) -> Self {
        Self {
            recommend,
            store,
            progress: None,
            turns: Vec::new(),
        }
    }

    /// Reporter to clear after each answer
    pub fn with_progress(mut self, progress: Arc<ProgressReporter>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        let history_path =
            dirs::data_dir().map(|p| p.join("vehicle-advisor").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                editor = editor.with_history(Box::new(history));
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("advisor".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome().await;

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    async fn print_welcome(&self) {
        let summary = self.store.summary().await;
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Vehicle Advisor - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        print!("{}", ConsoleFormatter::format_summary(&summary));
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /inventory        - Reload the inventory and show a summary");
        println!("  /clear            - Forget the conversation so far");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
                false
            }
            ReplCommand::Inventory => {
                self.store.refresh().await;
                let summary = self.store.summary().await;
                print!("{}", ConsoleFormatter::format_summary(&summary));
                false
            }
            ReplCommand::Clear => {
                self.turns.clear();
                println!("{}", "Conversation cleared.".dimmed());
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&mut self, question: &str) {
        println!();

        let history = Message::history_from_pairs(self.turns.iter().cloned());
        let result = self.recommend.answer(question, &history).await;

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        match result {
            Ok(answer) => {
                println!("{}", answer.trim_end());
                self.turns.push((question.to_string(), answer));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
